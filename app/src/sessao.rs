//! Comandos da sessão interativa no terminal.
//!
//! Cada linha digitada vira um [`Comando`], que é aplicado ao
//! [`ConsultaState`]. É aqui que os campos somente leitura são respeitados:
//! o comando `campo` só chega ao estado no modo de edição.

use std::str::FromStr;

use crate::client::ApiClient;
use crate::consulta::ConsultaState;
use crate::models::{CampoDesconhecido, CampoEditavel};
use crate::notificacao::Notificacao;

pub const AJUDA: &str = "\
Comandos:
  cnpj <texto>          define o CNPJ a consultar (com ou sem máscara)
  consultar             consulta o CNPJ informado
  editar                alterna entre leitura e edição
  campo <nome> <valor>  altera um campo no modo de edição
  submeter              envia os dados ao backend
  mostrar               mostra o registro carregado
  ajuda                 mostra esta mensagem
  sair                  encerra a sessão";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comando {
    Cnpj(String),
    Consultar,
    Editar,
    Campo { campo: CampoEditavel, valor: String },
    Submeter,
    Mostrar,
    Ajuda,
    Sair,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ComandoInvalido {
    #[error("comando vazio")]
    Vazio,
    #[error("comando desconhecido: {0} (digite 'ajuda')")]
    Desconhecido(String),
    #[error("uso: campo <nome> <valor>")]
    CampoSemNome,
    #[error("{0}; campos editáveis: {lista}", lista = campos_editaveis())]
    Campo(#[from] CampoDesconhecido),
}

fn campos_editaveis() -> String {
    CampoEditavel::TODOS.map(CampoEditavel::chave).join(", ")
}

impl FromStr for Comando {
    type Err = ComandoInvalido;

    fn from_str(linha: &str) -> Result<Self, Self::Err> {
        let linha = linha.trim();
        let (nome, resto) = match linha.split_once(char::is_whitespace) {
            Some((nome, resto)) => (nome, resto.trim()),
            None => (linha, ""),
        };

        match nome.to_lowercase().as_str() {
            "" => Err(ComandoInvalido::Vazio),
            "cnpj" => Ok(Comando::Cnpj(resto.to_string())),
            "consultar" => Ok(Comando::Consultar),
            "editar" => Ok(Comando::Editar),
            "campo" => {
                let (campo, valor) = match resto.split_once(char::is_whitespace) {
                    Some((campo, valor)) => (campo, valor.trim()),
                    None => (resto, ""),
                };
                if campo.is_empty() {
                    return Err(ComandoInvalido::CampoSemNome);
                }
                Ok(Comando::Campo {
                    campo: campo.parse()?,
                    valor: valor.to_string(),
                })
            }
            "submeter" => Ok(Comando::Submeter),
            "mostrar" => Ok(Comando::Mostrar),
            "ajuda" | "?" => Ok(Comando::Ajuda),
            "sair" => Ok(Comando::Sair),
            outro => Err(ComandoInvalido::Desconhecido(outro.to_string())),
        }
    }
}

/// O que a tela deve fazer depois de um comando.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saida {
    Notificacao(Notificacao),
    Aviso(String),
    Mostrar,
    Ajuda,
    Nada,
    Sair,
}

pub async fn executar(estado: &mut ConsultaState, client: &ApiClient, comando: Comando) -> Saida {
    match comando {
        Comando::Cnpj(texto) => {
            estado.alterar_cnpj(texto);
            Saida::Nada
        }
        Comando::Consultar => match estado.buscar(client).await {
            Some(notificacao) => Saida::Notificacao(notificacao),
            None => Saida::Nada,
        },
        Comando::Editar => {
            if estado.empresa().is_none() {
                return Saida::Aviso("Nenhum registro carregado.".into());
            }
            estado.alternar_edicao();
            Saida::Mostrar
        }
        Comando::Campo { campo, valor } => {
            if estado.empresa().is_none() {
                return Saida::Aviso("Nenhum registro carregado.".into());
            }
            if !estado.modo().is_editavel() {
                return Saida::Aviso(format!(
                    "Campo {campo} é somente leitura. Use 'editar' para habilitar a edição."
                ));
            }
            estado.editar_campo(campo, valor);
            Saida::Nada
        }
        Comando::Submeter => match estado.submeter(client).await {
            Some(notificacao) => Saida::Notificacao(notificacao),
            None => Saida::Aviso("Nenhum registro carregado.".into()),
        },
        Comando::Mostrar => {
            if estado.empresa().is_none() {
                return Saida::Aviso("Nenhum registro carregado.".into());
            }
            Saida::Mostrar
        }
        Comando::Ajuda => Saida::Ajuda,
        Comando::Sair => Saida::Sair,
    }
}

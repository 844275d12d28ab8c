//! Estado da página de consulta: CNPJ digitado, registro carregado e modo de
//! edição, com as transições consulta → exibição → edição → submissão.
//!
//! Cada consulta e cada submissão recebe um número de sequência ao começar.
//! Uma resposta só é aplicada se o seu número ainda for o último emitido para
//! aquele tipo de pedido; respostas atrasadas são descartadas sem alterar o
//! estado e sem notificação. Os métodos `buscar` e `submeter` fazem o ciclo
//! completo (iniciar, enviar, concluir) para quem não precisa despachar o
//! pedido em outra tarefa.

use crate::client::ApiClient;
use crate::cnpj::Cnpj;
use crate::error::ConsultaError;
use crate::models::{CampoEditavel, Empresa};
use crate::notificacao::{Notificacao, MSG_CONSULTA_OK, MSG_SUBMISSAO_OK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModoEdicao {
    #[default]
    Leitura,
    Edicao,
}

impl ModoEdicao {
    pub fn alternar(self) -> Self {
        match self {
            ModoEdicao::Leitura => ModoEdicao::Edicao,
            ModoEdicao::Edicao => ModoEdicao::Leitura,
        }
    }

    pub fn is_editavel(self) -> bool {
        self == ModoEdicao::Edicao
    }
}

/// Consulta iniciada e ainda não concluída.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedidoBusca {
    seq: u64,
    cnpj: Cnpj,
}

impl PedidoBusca {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn cnpj(&self) -> &Cnpj {
        &self.cnpj
    }
}

/// Submissão iniciada, com o registro como estava no momento do envio.
#[derive(Debug, Clone, PartialEq)]
pub struct PedidoSubmissao {
    seq: u64,
    empresa: Empresa,
}

impl PedidoSubmissao {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn empresa(&self) -> &Empresa {
        &self.empresa
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsultaState {
    cnpj_digitado: String,
    empresa: Option<Empresa>,
    modo: ModoEdicao,
    ultima_busca: u64,
    ultima_submissao: u64,
}

impl ConsultaState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda o texto do campo de CNPJ a cada tecla, sem validar.
    pub fn alterar_cnpj(&mut self, texto: impl Into<String>) {
        self.cnpj_digitado = texto.into();
    }

    pub fn cnpj_digitado(&self) -> &str {
        &self.cnpj_digitado
    }

    /// Registro carregado pela última consulta bem-sucedida.
    pub fn empresa(&self) -> Option<&Empresa> {
        self.empresa.as_ref()
    }

    pub fn modo(&self) -> ModoEdicao {
        self.modo
    }

    pub fn alternar_edicao(&mut self) -> ModoEdicao {
        self.modo = self.modo.alternar();
        tracing::debug!(modo = ?self.modo, "modo de edição alternado");
        self.modo
    }

    /// Aplica a edição de um campo ao registro carregado.
    ///
    /// Não verifica o modo de edição; a camada de exibição é quem bloqueia
    /// campos somente leitura. Sem registro carregado, não faz nada e
    /// retorna `false`.
    pub fn editar_campo(&mut self, campo: CampoEditavel, valor: impl Into<String>) -> bool {
        match self.empresa.as_ref() {
            Some(atual) => {
                self.empresa = Some(atual.com_campo(campo, valor));
                true
            }
            None => false,
        }
    }

    /// Valida o CNPJ digitado e abre um novo pedido de consulta.
    pub fn iniciar_busca(&mut self) -> Result<PedidoBusca, ConsultaError> {
        let cnpj = Cnpj::parse(&self.cnpj_digitado)?;
        self.ultima_busca += 1;
        Ok(PedidoBusca {
            seq: self.ultima_busca,
            cnpj,
        })
    }

    /// Aplica o resultado de uma consulta.
    ///
    /// Retorna `None` quando o pedido já foi superado por outro mais novo.
    pub fn concluir_busca(
        &mut self,
        pedido: &PedidoBusca,
        resultado: Result<Empresa, ConsultaError>,
    ) -> Option<Notificacao> {
        if pedido.seq != self.ultima_busca {
            tracing::debug!(
                seq = pedido.seq,
                ultima = self.ultima_busca,
                "descartando resposta de consulta atrasada"
            );
            return None;
        }

        match resultado {
            Ok(empresa) => {
                tracing::info!(
                    cnpj = %pedido.cnpj,
                    socios = empresa.qsa.len(),
                    "registro carregado"
                );
                self.empresa = Some(empresa);
                Some(Notificacao::sucesso(MSG_CONSULTA_OK))
            }
            Err(erro) => {
                tracing::warn!(status = ?erro.status(), error = %erro, "consulta falhou");
                Some(Notificacao::from(&erro))
            }
        }
    }

    /// Abre um pedido de submissão com uma cópia do registro atual.
    ///
    /// Sem registro carregado não há o que submeter e retorna `None`.
    pub fn iniciar_submissao(&mut self) -> Option<PedidoSubmissao> {
        let empresa = self.empresa.clone()?;
        self.ultima_submissao += 1;
        Some(PedidoSubmissao {
            seq: self.ultima_submissao,
            empresa,
        })
    }

    /// Aplica o resultado de uma submissão. Em caso de sucesso volta ao modo
    /// de leitura; em caso de falha o modo e o registro ficam como estão.
    pub fn concluir_submissao(
        &mut self,
        pedido: &PedidoSubmissao,
        resultado: Result<(), ConsultaError>,
    ) -> Option<Notificacao> {
        if pedido.seq != self.ultima_submissao {
            tracing::debug!(
                seq = pedido.seq,
                ultima = self.ultima_submissao,
                "descartando resposta de submissão atrasada"
            );
            return None;
        }

        match resultado {
            Ok(()) => {
                self.modo = ModoEdicao::Leitura;
                Some(Notificacao::sucesso(MSG_SUBMISSAO_OK))
            }
            Err(erro) => {
                tracing::warn!(status = ?erro.status(), error = %erro, "submissão falhou");
                Some(Notificacao::from(&erro))
            }
        }
    }

    /// Consulta o CNPJ digitado. CNPJ inválido não gera requisição.
    ///
    /// Como `&mut self` fica emprestado durante o await, o pedido é sempre o
    /// último e a notificação sempre vem preenchida.
    pub async fn buscar(&mut self, client: &ApiClient) -> Option<Notificacao> {
        let pedido = match self.iniciar_busca() {
            Ok(pedido) => pedido,
            Err(erro) => {
                tracing::debug!(error = %erro, "CNPJ rejeitado");
                return Some(Notificacao::from(&erro));
            }
        };
        let resultado = client.buscar_cnpj(pedido.cnpj()).await;
        self.concluir_busca(&pedido, resultado)
    }

    /// Submete o registro atual. Sem registro, não faz nada.
    pub async fn submeter(&mut self, client: &ApiClient) -> Option<Notificacao> {
        let pedido = self.iniciar_submissao()?;
        let resultado = client.submeter(pedido.empresa()).await;
        self.concluir_submissao(&pedido, resultado)
    }
}

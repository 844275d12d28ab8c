//! Modelo dos dados retornados pela consulta de CNPJ.
//!
//! Os nomes dos campos seguem o JSON da BrasilAPI (`/cnpj/v1/{cnpj}`). Campos
//! que não são modelados aqui ficam em `extras` e voltam intactos na
//! serialização, de forma que a submissão envia o registro completo.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::cnpj::Cnpj;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empresa {
    pub cnpj: String,
    pub razao_social: String,
    pub nome_fantasia: String,
    pub data_inicio_atividade: String,
    pub descricao_situacao_cadastral: String,
    pub cnae_fiscal_descricao: String,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub municipio: String,
    pub uf: String,
    pub ddd_telefone_1: Option<String>,
    /// Quadro societário, na ordem em que veio da API.
    pub qsa: Vec<Socio>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

/// Sócio do quadro societário.
///
/// Os campos opcionais distinguem chave ausente (`None`) de `null` explícito
/// (`Some(None)`): a chave ausente continua ausente na serialização. O
/// percentual guarda o número como veio, então `0` não vira `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socio {
    pub identificador_de_socio: i64,
    pub nome_socio: String,
    pub cnpj_cpf_do_socio: String,
    pub codigo_qualificacao_socio: i64,
    #[serde(default, deserialize_with = "presente", skip_serializing_if = "Option::is_none")]
    pub percentual_capital_social: Option<Option<Number>>,
    pub data_entrada_sociedade: String,
    #[serde(default, deserialize_with = "presente", skip_serializing_if = "Option::is_none")]
    pub cpf_representante_legal: Option<Option<String>>,
    #[serde(default, deserialize_with = "presente", skip_serializing_if = "Option::is_none")]
    pub nome_representante_legal: Option<Option<String>>,
    #[serde(default, deserialize_with = "presente", skip_serializing_if = "Option::is_none")]
    pub codigo_qualificacao_representante_legal: Option<Option<i64>>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

/// Chave presente no JSON, com valor ou `null`. A ausência fica a cargo do
/// `#[serde(default)]`.
fn presente<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Socio {
    pub fn percentual(&self) -> Option<&Number> {
        self.percentual_capital_social.as_ref().and_then(Option::as_ref)
    }

    pub fn cpf_representante(&self) -> Option<&str> {
        self.cpf_representante_legal.as_ref().and_then(|v| v.as_deref())
    }

    pub fn nome_representante(&self) -> Option<&str> {
        self.nome_representante_legal.as_ref().and_then(|v| v.as_deref())
    }

    pub fn qualificacao_representante(&self) -> Option<i64> {
        self.codigo_qualificacao_representante_legal.flatten()
    }
}

impl Empresa {
    /// Devolve uma cópia com apenas `campo` substituído por `valor`.
    ///
    /// Nenhuma validação é feita sobre o valor, e o modo de edição não é
    /// verificado aqui: quem chama decide se a edição é permitida.
    pub fn com_campo(&self, campo: CampoEditavel, valor: impl Into<String>) -> Empresa {
        let mut nova = self.clone();
        let valor = valor.into();
        match campo {
            CampoEditavel::NomeFantasia => nova.nome_fantasia = valor,
            CampoEditavel::RazaoSocial => nova.razao_social = valor,
            CampoEditavel::DataInicioAtividade => nova.data_inicio_atividade = valor,
            CampoEditavel::DescricaoSituacaoCadastral => nova.descricao_situacao_cadastral = valor,
            CampoEditavel::CnaeFiscalDescricao => nova.cnae_fiscal_descricao = valor,
            CampoEditavel::DddTelefone1 => nova.ddd_telefone_1 = Some(valor),
        }
        nova
    }

    /// Valor atual do campo como texto (telefone ausente vira string vazia).
    pub fn campo(&self, campo: CampoEditavel) -> &str {
        match campo {
            CampoEditavel::NomeFantasia => &self.nome_fantasia,
            CampoEditavel::RazaoSocial => &self.razao_social,
            CampoEditavel::DataInicioAtividade => &self.data_inicio_atividade,
            CampoEditavel::DescricaoSituacaoCadastral => &self.descricao_situacao_cadastral,
            CampoEditavel::CnaeFiscalDescricao => &self.cnae_fiscal_descricao,
            CampoEditavel::DddTelefone1 => self.ddd_telefone_1.as_deref().unwrap_or(""),
        }
    }

    /// CNPJ com máscara para exibição; fora do padrão, aparece como veio.
    pub fn cnpj_formatado(&self) -> String {
        Cnpj::parse(&self.cnpj)
            .map(|cnpj| cnpj.formatado())
            .unwrap_or_else(|_| self.cnpj.clone())
    }

    /// Endereço em uma linha, como exibido (somente leitura).
    pub fn endereco_completo(&self) -> String {
        format!(
            "{}, {} - {}, {} - {}",
            self.logradouro, self.numero, self.bairro, self.municipio, self.uf
        )
    }
}

/// Campos escalares do registro que podem ser editados localmente.
///
/// `cnpj` fica de fora: é o identificador do registro consultado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampoEditavel {
    NomeFantasia,
    RazaoSocial,
    DataInicioAtividade,
    DescricaoSituacaoCadastral,
    CnaeFiscalDescricao,
    DddTelefone1,
}

impl CampoEditavel {
    pub const TODOS: [CampoEditavel; 6] = [
        CampoEditavel::NomeFantasia,
        CampoEditavel::RazaoSocial,
        CampoEditavel::DataInicioAtividade,
        CampoEditavel::DescricaoSituacaoCadastral,
        CampoEditavel::CnaeFiscalDescricao,
        CampoEditavel::DddTelefone1,
    ];

    /// Nome do campo no JSON.
    pub fn chave(self) -> &'static str {
        match self {
            CampoEditavel::NomeFantasia => "nome_fantasia",
            CampoEditavel::RazaoSocial => "razao_social",
            CampoEditavel::DataInicioAtividade => "data_inicio_atividade",
            CampoEditavel::DescricaoSituacaoCadastral => "descricao_situacao_cadastral",
            CampoEditavel::CnaeFiscalDescricao => "cnae_fiscal_descricao",
            CampoEditavel::DddTelefone1 => "ddd_telefone_1",
        }
    }

    /// Rótulo exibido na tela.
    pub fn rotulo(self) -> &'static str {
        match self {
            CampoEditavel::NomeFantasia => "Nome",
            CampoEditavel::RazaoSocial => "Razão Social",
            CampoEditavel::DataInicioAtividade => "Data de Abertura",
            CampoEditavel::DescricaoSituacaoCadastral => "Situação",
            CampoEditavel::CnaeFiscalDescricao => "Atividade Principal",
            CampoEditavel::DddTelefone1 => "Telefone",
        }
    }
}

impl fmt::Display for CampoEditavel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chave())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("campo não editável: {0}")]
pub struct CampoDesconhecido(pub String);

impl FromStr for CampoEditavel {
    type Err = CampoDesconhecido;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampoEditavel::TODOS
            .into_iter()
            .find(|campo| campo.chave() == s)
            .ok_or_else(|| CampoDesconhecido(s.to_string()))
    }
}

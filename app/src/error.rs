//! Tipos de erro da consulta de CNPJ.

/// Mensagem exibida quando o CNPJ digitado não tem 14 dígitos.
pub const MSG_CNPJ_INVALIDO: &str = "CNPJ inválido. Por favor, insira um CNPJ válido.";
/// Mensagem exibida quando a consulta ao registro falha.
pub const MSG_ERRO_CONSULTA: &str =
    "Erro ao buscar informações. Verifique o CNPJ e tente novamente.";
/// Mensagem exibida quando a submissão ao backend falha.
pub const MSG_ERRO_SUBMISSAO: &str = "Erro ao submeter os dados. Tente novamente.";
/// Mensagem genérica para falhas não previstas (ex: resposta malformada).
pub const MSG_ERRO_INESPERADO: &str =
    "Ocorreu um erro inesperado. Tente novamente mais tarde.";

/// Falhas das operações da página de consulta.
#[derive(Debug, thiserror::Error)]
pub enum ConsultaError {
    /// O identificador limpo não tem exatamente 14 dígitos.
    #[error("CNPJ deve ter 14 dígitos, recebido {digitos:?}")]
    Validacao { digitos: String },

    /// A consulta ao registro falhou no transporte ou retornou status não-2xx.
    #[error("falha na consulta do CNPJ (status {status:?}): {detalhe}")]
    Consulta {
        status: Option<u16>,
        detalhe: String,
    },

    /// A submissão ao backend falhou no transporte ou retornou status não-2xx.
    #[error("falha na submissão (status {status:?}): {detalhe}")]
    Submissao {
        status: Option<u16>,
        detalhe: String,
    },

    /// Resposta 2xx cujo corpo não pôde ser interpretado.
    #[error("resposta inválida de {endpoint}: {detalhe}")]
    Resposta { endpoint: String, detalhe: String },
}

impl ConsultaError {
    /// Texto fixo mostrado ao usuário para esta falha.
    pub fn mensagem(&self) -> &'static str {
        match self {
            ConsultaError::Validacao { .. } => MSG_CNPJ_INVALIDO,
            ConsultaError::Consulta { .. } => MSG_ERRO_CONSULTA,
            ConsultaError::Submissao { .. } => MSG_ERRO_SUBMISSAO,
            ConsultaError::Resposta { .. } => MSG_ERRO_INESPERADO,
        }
    }

    /// Status HTTP associado, quando houve resposta.
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsultaError::Consulta { status, .. } | ConsultaError::Submissao { status, .. } => {
                *status
            }
            _ => None,
        }
    }
}

/// Erros de configuração dos endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("URL inválida para {0}: {1}")]
    UrlInvalida(String, String),
    #[error("falha ao criar cliente HTTP: {0}")]
    ClienteHttp(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_erro_tem_sua_mensagem_fixa() {
        let validacao = ConsultaError::Validacao {
            digitos: "123".into(),
        };
        assert_eq!(validacao.mensagem(), MSG_CNPJ_INVALIDO);

        let consulta = ConsultaError::Consulta {
            status: Some(404),
            detalhe: String::new(),
        };
        assert_eq!(consulta.mensagem(), MSG_ERRO_CONSULTA);
        assert_eq!(consulta.status(), Some(404));

        let submissao = ConsultaError::Submissao {
            status: None,
            detalhe: "timeout".into(),
        };
        assert_eq!(submissao.mensagem(), MSG_ERRO_SUBMISSAO);
        assert_eq!(submissao.status(), None);

        let resposta = ConsultaError::Resposta {
            endpoint: "GET /cnpj/v1".into(),
            detalhe: "EOF".into(),
        };
        assert_eq!(resposta.mensagem(), MSG_ERRO_INESPERADO);
    }
}

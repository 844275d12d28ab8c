use crate::error::ConsultaError;

/// Mensagem exibida após uma consulta bem-sucedida.
pub const MSG_CONSULTA_OK: &str = "Consulta realizada com sucesso!";
/// Mensagem exibida após uma submissão bem-sucedida.
pub const MSG_SUBMISSAO_OK: &str = "Dados submetidos com sucesso!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoNotificacao {
    Sucesso,
    Erro,
}

/// Aviso transitório mostrado ao usuário ao fim de uma ação.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notificacao {
    pub tipo: TipoNotificacao,
    pub mensagem: String,
}

impl Notificacao {
    pub fn sucesso(mensagem: impl Into<String>) -> Self {
        Self {
            tipo: TipoNotificacao::Sucesso,
            mensagem: mensagem.into(),
        }
    }

    pub fn erro(mensagem: impl Into<String>) -> Self {
        Self {
            tipo: TipoNotificacao::Erro,
            mensagem: mensagem.into(),
        }
    }

    pub fn is_erro(&self) -> bool {
        self.tipo == TipoNotificacao::Erro
    }
}

impl From<&ConsultaError> for Notificacao {
    fn from(erro: &ConsultaError) -> Self {
        Notificacao::erro(erro.mensagem())
    }
}

//! Consulta de CNPJ: busca o registro de uma empresa na BrasilAPI, permite
//! editar alguns campos localmente e submete o registro editado a um backend.
//!
//! O estado da tela fica em [`ConsultaState`], que pertence a quem monta a
//! visualização e é passado adiante explicitamente.

pub mod client;
pub mod cnpj;
pub mod config;
pub mod consulta;
pub mod error;
pub mod models;
pub mod notificacao;
pub mod sessao;
pub mod ui;

pub use client::ApiClient;
pub use cnpj::{limpar_cnpj, Cnpj};
pub use config::ClientConfig;
pub use consulta::{ConsultaState, ModoEdicao};
pub use error::{ConfigError, ConsultaError};
pub use models::{CampoEditavel, Empresa, Socio};
pub use notificacao::{Notificacao, TipoNotificacao};

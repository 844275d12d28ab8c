use std::fmt;

use crate::error::ConsultaError;

/// Quantidade de dígitos de um CNPJ.
pub const TAMANHO_CNPJ: usize = 14;

/// Remove tudo que não for dígito (pontos, barra, hífen, espaços...).
pub fn limpar_cnpj(texto: &str) -> String {
    texto.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// CNPJ já limpo e com exatamente 14 dígitos.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Limpa o texto digitado e valida o tamanho.
    pub fn parse(texto: &str) -> Result<Self, ConsultaError> {
        let digitos = limpar_cnpj(texto);
        if digitos.len() != TAMANHO_CNPJ {
            return Err(ConsultaError::Validacao { digitos });
        }
        Ok(Self(digitos))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formato de exibição: 11.222.333/0001-81
    pub fn formatado(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}/{}-{}", &d[0..2], &d[2..5], &d[5..8], &d[8..12], &d[12..14])
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn limpa_cnpj_com_mascara() {
        let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
    }

    #[test]
    fn aceita_cnpj_sem_mascara_e_com_espacos() {
        assert_eq!(Cnpj::parse(" 11222333000181 ").unwrap().as_str(), "11222333000181");
    }

    #[test]
    fn rejeita_cnpj_curto() {
        match Cnpj::parse("123") {
            Err(ConsultaError::Validacao { digitos }) => assert_eq!(digitos, "123"),
            other => panic!("esperado erro de validação, obtido {other:?}"),
        }
    }

    #[test]
    fn rejeita_cnpj_longo_e_vazio() {
        assert!(Cnpj::parse("112223330001811").is_err());
        assert!(Cnpj::parse("").is_err());
        assert!(Cnpj::parse("abc.def/ghij-kl").is_err());
    }

    #[test]
    fn formata_para_exibicao() {
        let cnpj = Cnpj::parse("11222333000181").unwrap();
        assert_eq!(cnpj.formatado(), "11.222.333/0001-81");
        assert_eq!(cnpj.to_string(), "11222333000181");
    }

    proptest! {
        #[test]
        fn limpar_e_idempotente(texto in ".*") {
            let uma_vez = limpar_cnpj(&texto);
            prop_assert_eq!(limpar_cnpj(&uma_vez), uma_vez.clone());
            prop_assert!(uma_vez.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

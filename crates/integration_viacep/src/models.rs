//! ViaCEP wire payload and the clean address record derived from it

use serde::{Deserialize, Serialize};

/// Raw ViaCEP response body.
///
/// Every field defaults to empty: the API answers an unknown CEP with a
/// `{"erro": true}` body (still HTTP 200), which deserializes to an
/// all-empty payload here.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ViaCepPayload {
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
}

/// A resolved address for a postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Postal code as echoed by the provider (may carry a separator)
    pub cep: String,
    /// Street name
    pub street: String,
    /// Address complement
    pub complement: String,
    /// District (bairro)
    pub district: String,
    /// City name (localidade)
    pub city: String,
    /// Two-letter state code (UF)
    pub state: String,
}

impl AddressRecord {
    /// Whether the provider failed to resolve the postal code.
    ///
    /// A record with both district and state empty counts as "not found",
    /// regardless of the HTTP status the provider answered with.
    pub fn is_unresolved(&self) -> bool {
        self.district.is_empty() && self.state.is_empty()
    }
}

impl From<ViaCepPayload> for AddressRecord {
    fn from(payload: ViaCepPayload) -> Self {
        Self {
            cep: payload.cep,
            street: payload.logradouro,
            complement: payload.complemento,
            district: payload.bairro,
            city: payload.localidade,
            state: payload.uf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> ViaCepPayload {
        serde_json::from_str(
            r#"{
                "cep": "01310-100",
                "logradouro": "Avenida Paulista",
                "complemento": "de 612 a 1510 - lado par",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn payload_maps_to_record() {
        let record = AddressRecord::from(sample_payload());
        assert_eq!(record.cep, "01310-100");
        assert_eq!(record.street, "Avenida Paulista");
        assert_eq!(record.district, "Bela Vista");
        assert_eq!(record.city, "São Paulo");
        assert_eq!(record.state, "SP");
        assert!(!record.is_unresolved());
    }

    #[test]
    fn erro_payload_deserializes_to_empty_record() {
        let payload: ViaCepPayload = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        let record = AddressRecord::from(payload);
        assert!(record.is_unresolved());
        assert!(record.city.is_empty());
    }

    #[test]
    fn record_with_city_but_no_district_or_state_is_unresolved() {
        let record = AddressRecord {
            cep: "99999999".to_string(),
            street: String::new(),
            complement: String::new(),
            district: String::new(),
            city: "Ghost Town".to_string(),
            state: String::new(),
        };
        assert!(record.is_unresolved());
    }

    #[test]
    fn record_with_only_district_is_resolved() {
        let record = AddressRecord {
            cep: String::new(),
            street: String::new(),
            complement: String::new(),
            district: "Centro".to_string(),
            city: String::new(),
            state: String::new(),
        };
        assert!(!record.is_unresolved());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload: ViaCepPayload = serde_json::from_str(
            r#"{"cep":"01310-100","localidade":"São Paulo","uf":"SP","ibge":"3550308","ddd":"11"}"#,
        )
        .unwrap();
        let record = AddressRecord::from(payload);
        assert_eq!(record.city, "São Paulo");
        assert!(!record.is_unresolved());
    }
}

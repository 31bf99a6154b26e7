use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "tarjeta")]
    Card,
    #[serde(rename = "transferencia")]
    Transfer,
    #[serde(rename = "efectivo")]
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Transfer,
        PaymentMethod::Cash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Card => "tarjeta",
            PaymentMethod::Transfer => "transferencia",
            PaymentMethod::Cash => "efectivo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Tarjeta",
            PaymentMethod::Transfer => "Transferencia",
            PaymentMethod::Cash => "Efectivo",
        }
    }

    pub fn from_wire(value: &str) -> Option<PaymentMethod> {
        PaymentMethod::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "completado")]
    Completed,
    #[serde(rename = "rechazado")]
    Rejected,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pendiente",
            PaymentStatus::Completed => "Completado",
            PaymentStatus::Rejected => "Rechazado",
            PaymentStatus::Unknown => "Desconocido",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentDto {
    pub id: String,
    pub inscripcion_id: String,
    pub monto: f64,
    pub metodo_pago: PaymentMethod,
    #[serde(default)]
    pub estado: PaymentStatus,
    #[serde(default)]
    pub referencia: Option<String>,
    #[serde(default)]
    pub fecha_pago: Option<NaiveDateTime>,
}

/// Method-specific fields of a payment, tagged by `metodo_pago` on the wire
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metodo_pago")]
pub enum PaymentDetails {
    #[serde(rename = "tarjeta")]
    Card {
        titular_tarjeta: String,
        ultimos_digitos: String,
        vencimiento: String,
    },
    #[serde(rename = "transferencia")]
    Transfer {
        banco: String,
        numero_referencia: String,
    },
    #[serde(rename = "efectivo")]
    Cash { numero_recibo: String },
}

impl PaymentDetails {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentDetails::Card { .. } => PaymentMethod::Card,
            PaymentDetails::Transfer { .. } => PaymentMethod::Transfer,
            PaymentDetails::Cash { .. } => PaymentMethod::Cash,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentDto {
    pub inscripcion_id: String,
    pub monto: f64,
    #[serde(flatten)]
    pub detalles: PaymentDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Expect the method tag to be flattened next to the shared fields
    fn test_create_payment_wire_shape() {
        let payment = CreatePaymentDto {
            inscripcion_id: "i1".to_string(),
            monto: 1500.0,
            detalles: PaymentDetails::Transfer {
                banco: "Banco Popular".to_string(),
                numero_referencia: "REF-42".to_string(),
            },
        };

        let json = serde_json::to_value(&payment).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "inscripcion_id": "i1",
                "monto": 1500.0,
                "metodo_pago": "transferencia",
                "banco": "Banco Popular",
                "numero_referencia": "REF-42",
            })
        );
    }

    #[test]
    /// Expect unknown payment states to decode instead of failing the list
    fn test_payment_status_unknown() {
        let status: PaymentStatus = serde_json::from_str("\"reembolsado\"").unwrap();

        assert_eq!(status, PaymentStatus::Unknown);
    }
}

//! Input state of the payment form and its conversion into a request.

use crate::{
    client::error::ApiError,
    model::payment::{CreatePaymentDto, PaymentDetails, PaymentMethod},
};

/// Raw form fields as typed, kept between failed submissions
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentForm {
    pub inscripcion_id: String,
    pub monto: String,
    pub method: PaymentMethod,
    pub card_number: String,
    pub card_holder: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub bank: String,
    pub transfer_reference: String,
    pub receipt_number: String,
}

impl PaymentForm {
    pub fn new(inscripcion_id: &str, amount: f64) -> Self {
        Self {
            inscripcion_id: inscripcion_id.to_string(),
            monto: if amount > 0.0 {
                format!("{:.2}", amount)
            } else {
                String::new()
            },
            method: PaymentMethod::Card,
            card_number: String::new(),
            card_holder: String::new(),
            card_expiry: String::new(),
            card_cvv: String::new(),
            bank: String::new(),
            transfer_reference: String::new(),
            receipt_number: String::new(),
        }
    }

    /// Checks the fields the selected method requires and builds the request
    ///
    /// The card number and CVV never leave this function, the request only
    /// carries the last four digits.
    pub fn validate(&self) -> Result<CreatePaymentDto, ApiError> {
        if self.inscripcion_id.trim().is_empty() {
            return Err(invalid("Selecciona la inscripción a pagar"));
        }

        let monto = self
            .monto
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .ok_or_else(|| invalid("El monto debe ser mayor que cero"))?;

        let detalles = match self.method {
            PaymentMethod::Card => self.card_details()?,
            PaymentMethod::Transfer => PaymentDetails::Transfer {
                banco: required(&self.bank, "Indica el banco de origen")?,
                numero_referencia: required(
                    &self.transfer_reference,
                    "Indica el número de referencia de la transferencia",
                )?,
            },
            PaymentMethod::Cash => PaymentDetails::Cash {
                numero_recibo: required(&self.receipt_number, "Indica el número de recibo")?,
            },
        };

        Ok(CreatePaymentDto {
            inscripcion_id: self.inscripcion_id.trim().to_string(),
            monto,
            detalles,
        })
    }

    fn card_details(&self) -> Result<PaymentDetails, ApiError> {
        let digits: String = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if !(13..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("El número de tarjeta no es válido"));
        }

        let titular = required(&self.card_holder, "Indica el titular de la tarjeta")?;

        let vencimiento = self.card_expiry.trim();
        if !is_valid_expiry(vencimiento) {
            return Err(invalid("La fecha de vencimiento debe tener el formato MM/AA"));
        }

        let cvv = self.card_cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("El código de seguridad no es válido"));
        }

        Ok(PaymentDetails::Card {
            titular_tarjeta: titular,
            ultimos_digitos: digits[digits.len() - 4..].to_string(),
            vencimiento: vencimiento.to_string(),
        })
    }
}

/// `MM/YY` with a month between 01 and 12
fn is_valid_expiry(value: &str) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };

    let two_digits = |part: &str| part.len() == 2 && part.chars().all(|c| c.is_ascii_digit());
    if !two_digits(month) || !two_digits(year) {
        return false;
    }

    matches!(month.parse::<u8>(), Ok(1..=12))
}

fn required(value: &str, message: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(message));
    }

    Ok(value.to_string())
}

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::PaymentForm;
    use crate::{
        client::error::ErrorKind,
        model::payment::{PaymentDetails, PaymentMethod},
    };

    fn card_form() -> PaymentForm {
        PaymentForm {
            card_number: "4111 1111 1111 1234".to_string(),
            card_holder: "María López".to_string(),
            card_expiry: "09/28".to_string(),
            card_cvv: "123".to_string(),
            ..PaymentForm::new("e1", 25.0)
        }
    }

    #[test]
    /// Expect only the last four card digits in the request
    fn test_card_payment_keeps_last_four_digits() {
        let payment = card_form().validate().unwrap();

        assert_eq!(payment.monto, 25.0);
        assert_eq!(
            payment.detalles,
            PaymentDetails::Card {
                titular_tarjeta: "María López".to_string(),
                ultimos_digitos: "1234".to_string(),
                vencimiento: "09/28".to_string(),
            }
        );

        let body = serde_json::to_string(&payment).unwrap();
        assert!(!body.contains("4111"));
        assert!(!body.contains("cvv"));
    }

    #[test]
    /// Expect malformed card fields to fail validation
    fn test_card_payment_rejections() {
        let cases = [
            PaymentForm { card_number: "4111".to_string(), ..card_form() },
            PaymentForm { card_number: "4111 1111 1111 12ab".to_string(), ..card_form() },
            PaymentForm { card_holder: " ".to_string(), ..card_form() },
            PaymentForm { card_expiry: "13/28".to_string(), ..card_form() },
            PaymentForm { card_expiry: "0928".to_string(), ..card_form() },
            PaymentForm { card_cvv: "12".to_string(), ..card_form() },
        ];

        for form in cases {
            assert_eq!(form.validate().unwrap_err().kind(), ErrorKind::Validation);
        }
    }

    #[test]
    /// Expect transfer and cash to require their own fields only
    fn test_transfer_and_cash_fields() {
        let mut form = PaymentForm::new("e1", 10.0);

        form.method = PaymentMethod::Transfer;
        assert!(form.validate().is_err());
        form.bank = "Banco Popular".to_string();
        form.transfer_reference = "REF-889".to_string();
        assert_eq!(form.validate().unwrap().detalles.method(), PaymentMethod::Transfer);

        form.method = PaymentMethod::Cash;
        assert!(form.validate().is_err());
        form.receipt_number = "R-001".to_string();
        assert_eq!(form.validate().unwrap().detalles.method(), PaymentMethod::Cash);
    }

    #[test]
    /// Expect zero, negative and unparsable amounts to be rejected
    fn test_amount_must_be_positive() {
        for monto in ["", "0", "-5", "abc"] {
            let form = PaymentForm {
                monto: monto.to_string(),
                ..card_form()
            };

            assert!(form.validate().is_err());
        }

        let form = PaymentForm {
            monto: "12,50".to_string(),
            ..card_form()
        };
        assert_eq!(form.validate().unwrap().monto, 12.5);
    }
}

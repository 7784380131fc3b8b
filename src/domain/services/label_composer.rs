//! # Label Composer
//!
//! Renders the printable shipping label and the order summary.
//!
//! Pure string assembly: the price is taken from the subject as computed.
//! The service line shows the tier's display name, or the raw code when the
//! code names no known tier; such labels carry no price.
//!
//! # Label Layout
//!
//! ```text
//! Destinatário: Ana
//! Endereço: Rua A, 123
//! Peso: 12 kg
//! Serviço: Padrão
//! Valor do Frete: R$34.00
//! ```

use crate::domain::entities::{Label, LabelSubject};
use crate::domain::value_objects::service_type::display_name_for_code;

/// Shown in place of the price when the service code has no tariff tier.
pub const UNPRICED_TEXT: &str = "a consultar";

/// Builds [`Label`]s.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::entities::{LabelSubject, Quote, Shipment};
/// use freight_quote::domain::services::label_composer::LabelComposer;
/// use freight_quote::domain::value_objects::{Money, ServiceType, Weight};
/// use rust_decimal::Decimal;
///
/// let shipment = Shipment::new(
///     "Ana",
///     "Rua A, 123",
///     Weight::new(Decimal::new(12, 0)).unwrap(),
///     ServiceType::Standard,
/// )
/// .unwrap();
/// let quote = Quote::new(shipment, Money::from_decimal(Decimal::new(34, 0)).unwrap());
///
/// let label = LabelComposer::new().compose(&LabelSubject::from(&quote));
/// assert!(label.label_text.contains("Serviço: Padrão"));
/// assert_eq!(
///     label.summary_text,
///     "Pedido para Ana em Rua A, 123 com frete Padrão no valor de R$34.00"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelComposer;

impl LabelComposer {
    /// Creates a label composer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders the label and summary.
    #[must_use]
    pub fn compose(&self, subject: &LabelSubject) -> Label {
        let service = display_name_for_code(subject.service_code());
        let price = subject.price().map(|price| price.display_brl());

        let label_text = format!(
            "Destinatário: {}\nEndereço: {}\nPeso: {} kg\nServiço: {}\nValor do Frete: {}",
            subject.recipient(),
            subject.address(),
            subject.weight(),
            service,
            price.as_deref().unwrap_or(UNPRICED_TEXT),
        );
        let summary_text = match price {
            Some(price) => format!(
                "Pedido para {} em {} com frete {} no valor de {}",
                subject.recipient(),
                subject.address(),
                service,
                price,
            ),
            None => format!(
                "Pedido para {} em {} com frete {}, valor {}",
                subject.recipient(),
                subject.address(),
                service,
                UNPRICED_TEXT,
            ),
        };

        Label {
            label_text,
            summary_text,
        }
    }
}

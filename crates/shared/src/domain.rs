use chrono::Utc;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(MerchantId);
id_newtype!(TransactionId);

impl TransactionId {
    /// Mints a fresh id in the gateway's `TXN_<unix-millis>` shape.
    pub fn mint() -> Self {
        Self(format!("TXN_{}", Utc::now().timestamp_millis()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Welcome,
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
}

/// The opaque payload encoded into the payment QR code. Field names follow
/// the gateway's camelCase wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDescriptor {
    /// Amount in minor currency units (IDR has none, so rupiah as-is).
    pub amount: i64,
    pub currency: String,
    pub merchant_id: MerchantId,
    pub transaction_id: TransactionId,
    pub description: String,
}

impl PaymentDescriptor {
    pub fn new(
        amount: i64,
        currency: impl Into<String>,
        merchant_id: MerchantId,
        transaction_id: TransactionId,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            merchant_id,
            transaction_id,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_serializes_with_camel_case_wire_keys() {
        let descriptor = PaymentDescriptor::new(
            50_000,
            "IDR",
            MerchantId("PHOTOBOOTH_001".to_string()),
            TransactionId("TXN_1700000000000".to_string()),
            "Photobooth Session Payment",
        );

        let value = serde_json::to_value(&descriptor).expect("serialize descriptor");
        let object = value.as_object().expect("descriptor is a json object");

        for key in ["amount", "currency", "merchantId", "transactionId", "description"] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(object["amount"], 50_000);
        assert_eq!(object["merchantId"], "PHOTOBOOTH_001");
    }

    #[test]
    fn minted_transaction_ids_carry_the_txn_prefix() {
        let id = TransactionId::mint();
        assert!(id.as_str().starts_with("TXN_"));
        assert!(id.as_str().len() > "TXN_".len());
    }
}

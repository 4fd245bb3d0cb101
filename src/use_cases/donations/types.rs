use chrono::{DateTime, FixedOffset};
use db_adapters::donation_adapter::DonationFundSummary;
use entities::{
    donation,
    sea_orm_active_enums::{DonationFund, DonationStatus, PaymentMethod},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DonationVisible {
    pub id: Uuid,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub fund: DonationFund,
    pub payment_method: PaymentMethod,
    pub status: DonationStatus,
    pub is_anonymous: bool,
    pub notes: Option<String>,
    pub receipt_number: String,
    pub transaction_id: String,
    pub donated_at: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<donation::Model> for DonationVisible {
    fn from(value: donation::Model) -> Self {
        Self {
            id: value.id,
            donor_name: value.donor_name,
            donor_email: value.donor_email,
            amount: value.amount,
            currency: value.currency,
            fund: value.fund,
            payment_method: value.payment_method,
            status: value.status,
            is_anonymous: value.is_anonymous,
            notes: value.notes,
            receipt_number: value.receipt_number,
            transaction_id: value.transaction_id,
            donated_at: value.donated_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Public receipt lookup; donor details are withheld for anonymous gifts.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DonationReceipt {
    pub receipt_number: String,
    pub transaction_id: String,
    pub donor_name: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub fund: DonationFund,
    pub payment_method: PaymentMethod,
    pub status: DonationStatus,
    pub donated_at: DateTime<FixedOffset>,
}

impl From<donation::Model> for DonationReceipt {
    fn from(value: donation::Model) -> Self {
        Self {
            receipt_number: value.receipt_number,
            transaction_id: value.transaction_id,
            donor_name: match value.is_anonymous {
                true => None,
                false => value.donor_name,
            },
            amount: value.amount,
            currency: value.currency,
            fund: value.fund,
            payment_method: value.payment_method,
            status: value.status,
            donated_at: value.donated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DonationCreateRequest {
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    /// Minor currency units.
    pub amount: i64,
    pub currency: Option<String>,
    pub fund: Option<DonationFund>,
    pub payment_method: Option<PaymentMethod>,
    pub is_anonymous: Option<bool>,
    pub notes: Option<String>,
    pub donated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DonationListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub fund: Option<DonationFund>,
    pub status: Option<DonationStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DonationStatusUpdateRequest {
    pub status: DonationStatus,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DonationSummary {
    pub total_amount: i64,
    pub donation_count: i64,
    pub by_fund: Vec<DonationFundSummary>,
}

pub const DEFAULT_CURRENCY: &str = "USD";

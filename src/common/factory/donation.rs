use chrono::{DateTime, Datelike, FixedOffset, Utc};
use entities::{
    donation,
    sea_orm_active_enums::{DonationFund, DonationStatus, PaymentMethod},
};
use sea_orm::Set;
use uuid::Uuid;

pub fn donation() -> donation::ActiveModel {
    let now = Utc::now();
    let id = Uuid::now_v7();
    donation::ActiveModel {
        id: Set(id),
        donor_name: Set(Some("Zacchaeus".to_string())),
        donor_email: Set(Some(format!("{}@test.com", id))),
        amount: Set(10_000),
        currency: Set("USD".to_string()),
        fund: Set(DonationFund::Offering),
        payment_method: Set(PaymentMethod::Online),
        status: Set(DonationStatus::Completed),
        is_anonymous: Set(false),
        notes: Set(None),
        receipt_number: Set(format!("RCP-{}-F{}", now.year(), id.simple())),
        transaction_id: Set(format!("TXN-FACTORY-{}", id.simple())),
        donated_at: Set(now.into()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait DonationFactory {
    fn amount(self, amount: i64) -> donation::ActiveModel;
    fn fund(self, fund: DonationFund) -> donation::ActiveModel;
    fn status(self, status: DonationStatus) -> donation::ActiveModel;
    fn receipt_number(self, receipt_number: &str) -> donation::ActiveModel;
    fn donated_at(self, donated_at: DateTime<FixedOffset>) -> donation::ActiveModel;
}

impl DonationFactory for donation::ActiveModel {
    fn amount(mut self, amount: i64) -> donation::ActiveModel {
        self.amount = Set(amount);
        self
    }

    fn fund(mut self, fund: DonationFund) -> donation::ActiveModel {
        self.fund = Set(fund);
        self
    }

    fn status(mut self, status: DonationStatus) -> donation::ActiveModel {
        self.status = Set(status);
        self
    }

    fn receipt_number(mut self, receipt_number: &str) -> donation::ActiveModel {
        self.receipt_number = Set(receipt_number.to_string());
        self
    }

    fn donated_at(mut self, donated_at: DateTime<FixedOffset>) -> donation::ActiveModel {
        self.donated_at = Set(donated_at);
        self
    }
}

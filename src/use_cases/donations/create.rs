use chrono::{Datelike, Utc};
use db_adapters::{
    donation_adapter::{
        CreateDonationParams, DonationAdapter, DonationFilter, DonationMutation, DonationQuery,
    },
    is_duplicate,
};
use entities::sea_orm_active_enums::{DonationFund, DonationStatus, PaymentMethod};
use tracing::{event, Level};

use crate::{
    donations::{
        receipt::{format_receipt_number, generate_transaction_id, receipt_prefix},
        types::{DonationCreateRequest, DonationVisible, DEFAULT_CURRENCY},
    },
    error_500, validate_email, UseCaseError,
};

const MAX_RECEIPT_ATTEMPTS: u64 = 5;

/// Receipt number and transaction id are assigned here, once, and never change afterwards.
pub async fn create_donation<'a>(
    params: DonationCreateRequest,
    donation_adapter: DonationAdapter<'a>,
) -> Result<DonationVisible, UseCaseError> {
    if params.amount <= 0 {
        return Err(UseCaseError::BadRequest(
            "amount must be greater than 0.".to_string(),
        ));
    }
    let currency = normalize_currency(params.currency.as_deref())?;
    let donor_email = match params.donor_email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => {
            let email = email.to_lowercase();
            validate_email(&email)?;
            Some(email)
        }
        _ => None,
    };
    let donor_name = params
        .donor_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let now = Utc::now();
    let year = now.year();
    let prefix = receipt_prefix(year);

    for _ in 0..MAX_RECEIPT_ATTEMPTS {
        let issued = donation_adapter
            .clone()
            .filter_receipt_number_starts_with(&prefix)
            .get_receipt_numbers()
            .await
            .map_err(error_500)?;
        let receipt_number = format_receipt_number(year, next_receipt_sequence(&prefix, &issued));
        match donation_adapter
            .clone()
            .create(CreateDonationParams {
                donor_name: donor_name.clone(),
                donor_email: donor_email.clone(),
                amount: params.amount,
                currency: currency.clone(),
                fund: params.fund.unwrap_or(DonationFund::Offering),
                payment_method: params.payment_method.unwrap_or(PaymentMethod::Online),
                status: DonationStatus::Pending,
                is_anonymous: params.is_anonymous.unwrap_or(false),
                notes: params.notes.clone(),
                receipt_number: receipt_number.clone(),
                transaction_id: generate_transaction_id(Utc::now()),
                donated_at: params.donated_at.unwrap_or(now.into()),
            })
            .await
        {
            Ok(donation) => return Ok(DonationVisible::from(donation)),
            Err(e) if is_duplicate(&e) => {
                event!(target: "backend", Level::WARN, "Receipt number {} already taken, retrying.", receipt_number);
            }
            Err(e) => return Err(error_500(e)),
        }
    }

    Err(UseCaseError::Conflict(
        "A receipt number could not be allocated. Please try again.".to_string(),
    ))
}

/// Gaps left by deleted receipts are not refilled.
fn next_receipt_sequence(prefix: &str, issued: &[String]) -> u64 {
    issued
        .iter()
        .filter_map(|number| number.strip_prefix(prefix)?.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1
}

fn normalize_currency(currency: Option<&str>) -> Result<String, UseCaseError> {
    let currency = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_ascii_uppercase();
    match currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic()) {
        true => Ok(currency),
        false => Err(UseCaseError::BadRequest(
            "currency must be a 3 letter code.".to_string(),
        )),
    }
}

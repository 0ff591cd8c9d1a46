//! Member registration
//!
//! POST /api/members — validate, assign a book, draw the winner status, store the member

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::error::{AppError, ErrorCode};
use shared::request::RegisterMemberRequest;
use shared::response::RegisterMemberResponse;
use shared::{BookId, NewMember};

use crate::allocation::{self, BookCounts, ContestPolicy};
use crate::error::ServiceResult;
use crate::repository::MemberRepository;
use crate::state::AppState;

/// Length of a phone number, digits only
pub const PHONE_NUMBER_LEN: usize = 11;

/// A request that passed input validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl Registration {
    /// Check required fields and the phone number format; touches no storage
    pub fn validate(req: RegisterMemberRequest) -> Result<Self, AppError> {
        let name = req.members_name.filter(|s| !s.is_empty());
        let phone_number = req.members_phone_number.filter(|s| !s.is_empty());

        let (Some(name), Some(phone_number)) = (name, phone_number) else {
            return Err(AppError::new(ErrorCode::RequiredField));
        };

        if !is_valid_phone_number(&phone_number) {
            return Err(AppError::new(ErrorCode::InvalidPhoneNumber));
        }

        Ok(Self {
            name,
            phone_number,
            company: req.members_company,
            message: req.members_message,
        })
    }
}

/// Exactly 11 ASCII digits
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    phone_number.len() == PHONE_NUMBER_LEN && phone_number.bytes().all(|b| b.is_ascii_digit())
}

// ── POST /api/members ──

pub async fn register_member(
    State(state): State<AppState>,
    payload: Result<Json<RegisterMemberRequest>, JsonRejection>,
) -> ServiceResult<Json<RegisterMemberResponse>> {
    let Json(req) = payload.map_err(|e| {
        tracing::info!(error = %e, "Malformed registration body");
        AppError::invalid_request(e.body_text())
    })?;

    let registration = Registration::validate(req).inspect_err(|e| {
        tracing::info!(code = %e.code, "Registration rejected: {}", e.message);
    })?;

    let mut rng = StdRng::from_entropy();
    let response = register(state.repo.as_ref(), &state.policy, registration, &mut rng).await?;
    Ok(Json(response))
}

/// Run one registration against the store.
///
/// Sequential reads then writes with no transaction: duplicate check, quota
/// counts, book choice, stock check, winner draw, insert, stock decrement.
pub async fn register<R: Rng + Send>(
    repo: &dyn MemberRepository,
    policy: &ContestPolicy,
    registration: Registration,
    rng: &mut R,
) -> ServiceResult<RegisterMemberResponse> {
    if repo.phone_number_exists(&registration.phone_number).await? {
        tracing::info!(
            phone_number = %registration.phone_number,
            "Registration rejected: duplicate phone number"
        );
        return Err(ErrorCode::DuplicatePhoneNumber.into());
    }

    let counts = BookCounts {
        first: repo.count_by_book(BookId::First).await?,
        second: repo.count_by_book(BookId::Second).await?,
    };
    let book = allocation::allocate_book(policy, counts, rng);

    // A missing Books row is rejected as out of stock; a plain `<= 0` check
    // on the row would have let it through to an insert with no stock to take
    match repo.book_quantity(book).await? {
        Some(quantity) if quantity > 0 => {}
        quantity => {
            tracing::warn!(book = %book, ?quantity, "Registration rejected: book out of stock");
            return Err(ErrorCode::BookOutOfStock.into());
        }
    }

    let winners = repo.count_winners().await?;
    let registered = repo.count_registered().await?;
    let winner_status = allocation::decide_winner(policy, winners, registered, rng);

    let new_member = NewMember {
        name: registration.name,
        phone_number: registration.phone_number,
        company: registration.company,
        message: registration.message,
        book_id: book,
        winner_status,
    };
    let inserted = repo.insert_member(&new_member).await?;

    // Stock goes down even if the insert returned no row; nothing is rolled back
    repo.decrement_book(book).await?;

    let Some(member) = inserted else {
        tracing::error!(book = %book, "Member insert returned no row");
        return Err(ErrorCode::MemberNotSaved.into());
    };

    tracing::info!(
        member_id = member.members_id,
        book = %book,
        book_members = counts.get(book) + 1,
        winner_status = %winner_status,
        winners,
        registered,
        "Member registered"
    );

    Ok(RegisterMemberResponse::new(
        member.members_id,
        book,
        winner_status,
    ))
}

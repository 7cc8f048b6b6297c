use argon2::{Argon2, PasswordHasher};
use password_hash::{SaltString, rand_core::OsRng};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::cashiers::{CashierList, CashiersByShift, CreateCashierRequest},
    entity::cashiers::{ActiveModel, Column, Entity as Cashiers, Model as CashierModel},
    error::{AppError, AppResult},
    models::Cashier,
    response::{Ack, ApiResponse, Meta},
    state::AppState,
};

pub async fn list_cashiers(state: &AppState) -> AppResult<ApiResponse<CashierList>> {
    let items: Vec<Cashier> = Cashiers::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(cashier_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Cashiers",
        CashierList { items, count },
        Some(Meta::total(count)),
    ))
}

pub async fn list_cashiers_by_shift(
    state: &AppState,
    shift: String,
) -> AppResult<ApiResponse<CashiersByShift>> {
    let items: Vec<Cashier> = Cashiers::find()
        .filter(Column::Shift.eq(shift.clone()))
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(cashier_from_entity)
        .collect();

    let count = items.len();
    Ok(ApiResponse::success(
        "Cashiers by shift",
        CashiersByShift {
            shift,
            items,
            count,
        },
        Some(Meta::total(count)),
    ))
}

pub async fn get_cashier(state: &AppState, id: i32) -> AppResult<ApiResponse<Cashier>> {
    let cashier = Cashiers::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(cashier_from_entity);
    let cashier = match cashier {
        Some(c) => c,
        None => return Err(AppError::not_found("Cashier", id)),
    };
    Ok(ApiResponse::success("Cashier", cashier, None))
}

pub async fn create_cashier(
    state: &AppState,
    payload: CreateCashierRequest,
) -> AppResult<ApiResponse<Cashier>> {
    let taken = Cashiers::find()
        .filter(Column::Username.eq(payload.username.clone()))
        .one(&state.orm)
        .await?;
    if taken.is_some() {
        return Err(AppError::BadRequest(format!(
            "username {} is already taken",
            payload.username
        )));
    }

    let password_hash = hash_password(&payload.password)?;
    let cashier = ActiveModel {
        id: NotSet,
        full_name: Set(payload.full_name),
        shift: Set(payload.shift),
        username: Set(payload.username),
        password_hash: Set(password_hash),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(cashier_id = cashier.id, shift = %cashier.shift, "cashier created");
    Ok(ApiResponse::success(
        "Cashier created",
        cashier_from_entity(cashier),
        Some(Meta::empty()),
    ))
}

pub async fn delete_cashier(state: &AppState, id: i32) -> AppResult<ApiResponse<Ack>> {
    let result = Cashiers::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Cashier", id));
    }

    tracing::info!(cashier_id = id, "cashier deleted");
    Ok(ApiResponse::success(
        format!("Cashier {id} deleted"),
        Ack { id },
        Some(Meta::empty()),
    ))
}

/// Argon2id PHC string for the given password, with a fresh random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn cashier_from_entity(model: CashierModel) -> Cashier {
    Cashier {
        id: model.id,
        full_name: model.full_name,
        shift: model.shift,
        username: model.username,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn hashed_password_verifies_and_hides_plaintext() {
        let hash = hash_password("s3cret").unwrap();
        assert!(!hash.contains("s3cret"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default().verify_password(b"s3cret", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(hash_password("pw").unwrap(), hash_password("pw").unwrap());
    }
}

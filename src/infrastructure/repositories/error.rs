use crate::domain::errors::DomainError;

const CNT_USER_CPF: &str = "users_cpf_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_RECIPIENT_EMAIL: &str = "recipients_email_key";
const CNT_ORDER_TRACKING_CODE: &str = "orders_tracking_code_key";
const CNT_ORDER_RECIPIENT: &str = "orders_recipient_id_fkey";
const CNT_ORDER_DELIVERYMAN: &str = "orders_deliveryman_id_fkey";
const CNT_ORDER_STATE_CHECK: &str = "orders_state_consistency_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_CPF => DomainError::Conflict("cpf already in use".into()),
                    CNT_USER_EMAIL | CNT_RECIPIENT_EMAIL => {
                        DomainError::Conflict("email already in use".into())
                    }
                    CNT_ORDER_TRACKING_CODE => {
                        DomainError::Conflict("tracking code already exists".into())
                    }
                    CNT_ORDER_RECIPIENT => DomainError::NotFound("recipient not found".into()),
                    CNT_ORDER_DELIVERYMAN => DomainError::NotFound("deliveryman not found".into()),
                    CNT_ORDER_STATE_CHECK => DomainError::Validation(
                        "order status does not match its delivery data".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

use healthmate_core::entities::{radar_sessions, users};
use healthmate_core::family::DEFAULT_RELATION;
use healthmate_core::radar;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument, warn};

use super::dtos::{BroadcastResponse, RadarPeer};
use crate::family;
use crate::{AppError, AppResult};

pub struct BroadcastUseCase;

impl BroadcastUseCase {
    /// One step of the radar handshake, run in a single transaction:
    ///
    /// 1. expired sessions are purged;
    /// 2. a live session with the same code from another user is claimed,
    ///    which links the two users as family and consumes the code;
    /// 3. otherwise the caller's own session is created or replaced and the
    ///    caller waits for a peer.
    ///
    /// `now` is unix seconds.
    #[instrument(skip(db, code))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        code: &str,
        now: i64,
    ) -> AppResult<BroadcastResponse> {
        let Some(code) = radar::normalize_code(code) else {
            warn!("Rejected radar code");
            return Err(AppError::Validation(format!(
                "code must be 1-{} characters",
                radar::MAX_CODE_LENGTH
            )));
        };

        let txn = db.begin().await?;

        let purged = radar_sessions::Entity::delete_many()
            .filter(radar_sessions::Column::ExpiresAt.lte(now))
            .exec(&txn)
            .await?
            .rows_affected;
        if purged > 0 {
            info!(purged, "Purged expired radar sessions");
        }

        let candidate = radar_sessions::Entity::find()
            .filter(radar_sessions::Column::Code.eq(code.as_str()))
            .filter(radar_sessions::Column::UserId.ne(user_id))
            .filter(radar_sessions::Column::ExpiresAt.gt(now))
            .order_by_asc(radar_sessions::Column::CreatedAt)
            .order_by_asc(radar_sessions::Column::UserId)
            .one(&txn)
            .await?;

        if let Some(session) = candidate {
            if claim(&txn, &session).await? {
                let peer = users::Entity::find_by_id(session.user_id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("User {} not found", session.user_id)))?;

                family::link(&txn, user_id, peer.id, DEFAULT_RELATION).await?;

                // The code is spent, and so is anything the caller had pending
                radar_sessions::Entity::delete_many()
                    .filter(
                        Condition::any()
                            .add(radar_sessions::Column::Code.eq(code.as_str()))
                            .add(radar_sessions::Column::UserId.eq(user_id)),
                    )
                    .exec(&txn)
                    .await?;

                txn.commit().await?;

                info!(peer_id = peer.id, "Radar matched");
                return Ok(BroadcastResponse::matched(RadarPeer {
                    user_id: peer.id,
                    username: peer.username,
                    avatar_ref: peer.avatar_ref,
                }));
            }
        }

        let expires_at = radar::expires_at(now);
        radar_sessions::Entity::insert(radar_sessions::ActiveModel {
            user_id: Set(user_id),
            code: Set(code),
            created_at: Set(now),
            expires_at: Set(expires_at),
        })
        .on_conflict(
            OnConflict::column(radar_sessions::Column::UserId)
                .update_columns([
                    radar_sessions::Column::Code,
                    radar_sessions::Column::CreatedAt,
                    radar_sessions::Column::ExpiresAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;

        info!(expires_at, "Radar waiting for a peer");
        Ok(BroadcastResponse::waiting(expires_at))
    }
}

/// Deletes the peer's session. A concurrent broadcast that got there first
/// leaves nothing to delete, and the caller falls back to waiting.
async fn claim(txn: &DatabaseTransaction, session: &radar_sessions::Model) -> Result<bool, DbErr> {
    let claimed = radar_sessions::Entity::delete_many()
        .filter(radar_sessions::Column::UserId.eq(session.user_id))
        .filter(radar_sessions::Column::Code.eq(session.code.as_str()))
        .exec(txn)
        .await?
        .rows_affected;
    Ok(claimed == 1)
}

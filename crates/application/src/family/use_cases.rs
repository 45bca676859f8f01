use healthmate_core::entities::{family_members, users};
use healthmate_core::family::{DEFAULT_RELATION, STATUS_ACTIVE};
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};
use validator::Validate;

use super::dtos::{AddFamilyMemberRequest, FamilyMemberDto, RemoveFamilyMemberResponse};
use crate::{calendar, AppError, AppResult};

// ============ Add Family Member Use Case ============

pub struct AddFamilyMemberUseCase;

impl AddFamilyMemberUseCase {
    #[instrument(skip(db, req), fields(member_id = req.member_id))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        req: AddFamilyMemberRequest,
    ) -> AppResult<()> {
        let req = AddFamilyMemberRequest {
            relation: req
                .relation
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            ..req
        };
        req.validate()?;

        if req.member_id == user_id {
            return Err(AppError::Validation("Cannot add yourself as a family member".to_string()));
        }

        users::Entity::find_by_id(req.member_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", req.member_id)))?;

        let relation = req.relation.as_deref().unwrap_or(DEFAULT_RELATION);

        let txn = db.begin().await?;
        let created = link(&txn, user_id, req.member_id, relation).await?;
        txn.commit().await?;

        info!(created, "Family relationship established");
        Ok(())
    }
}

/// Inserts both directed edges between `a` and `b`. Edges that already exist
/// are left alone. Returns how many were created.
pub(crate) async fn link<C>(conn: &C, a: i32, b: i32, relation: &str) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let now = calendar::now();
    let edge = |user_id: i32, member_id: i32| family_members::ActiveModel {
        user_id: Set(user_id),
        member_id: Set(member_id),
        relation: Set(relation.to_string()),
        status: Set(STATUS_ACTIVE),
        created_at: Set(now),
    };

    family_members::Entity::insert_many([edge(a, b), edge(b, a)])
        .on_conflict(
            OnConflict::columns([family_members::Column::UserId, family_members::Column::MemberId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
}

// ============ Remove Family Member Use Case ============

pub struct RemoveFamilyMemberUseCase;

impl RemoveFamilyMemberUseCase {
    /// Deletes both directions in one statement. Unrelated users are not an error.
    #[instrument(skip(db))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        member_id: i32,
    ) -> AppResult<RemoveFamilyMemberResponse> {
        let result = family_members::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(
                        family_members::Column::UserId
                            .eq(user_id)
                            .and(family_members::Column::MemberId.eq(member_id)),
                    )
                    .add(
                        family_members::Column::UserId
                            .eq(member_id)
                            .and(family_members::Column::MemberId.eq(user_id)),
                    ),
            )
            .exec(db)
            .await?;

        info!(removed = result.rows_affected, "Family relationship removed");
        Ok(RemoveFamilyMemberResponse {
            removed: result.rows_affected,
        })
    }
}

// ============ List Family Members Use Case ============

pub struct ListFamilyMembersUseCase;

impl ListFamilyMembersUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: i32) -> AppResult<Vec<FamilyMemberDto>> {
        let rows = family_members::Entity::find()
            .filter(
                family_members::Column::UserId
                    .eq(user_id)
                    .and(family_members::Column::Status.eq(STATUS_ACTIVE)),
            )
            .find_also_related(users::Entity)
            .order_by_asc(users::Column::Username)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(edge, member)| {
                member.map(|m| FamilyMemberDto {
                    user_id: m.id,
                    username: m.username,
                    avatar_ref: m.avatar_ref,
                    relation: edge.relation,
                    created_at: edge.created_at.timestamp(),
                })
            })
            .collect())
    }
}

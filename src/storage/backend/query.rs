//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func},
};
use tracing::error;

use super::{ListingFilter, SeaOrmStorage, retry};
use crate::errors::{Result, ScrapTradeError};
use crate::storage::Listing;

use migration::entities::listing;

use super::converters::model_to_listing;

impl SeaOrmStorage {
    pub async fn get(&self, id: &str) -> Option<Listing> {
        let db = &self.db;
        let id_owned = id.to_string();

        let result = retry::with_retry(&format!("get({})", id), self.retry_config, || async {
            listing::Entity::find_by_id(&id_owned).one(db).await
        })
        .await;

        match result {
            Ok(Some(model)) => Some(model_to_listing(model)),
            Ok(None) => None,
            Err(e) => {
                error!("查询挂单失败（重试后仍失败）: {}", e);
                None
            }
        }
    }

    /// 带过滤条件加载挂单，按创建时间倒序（最新在前）
    pub async fn load_filtered(&self, filter: ListingFilter) -> Result<Vec<Listing>> {
        let mut condition = Condition::all();

        // kind: 精确匹配
        if let Some(kind) = filter.kind {
            condition = condition.add(listing::Column::Kind.eq(kind.as_str()));
        }

        // category: 精确匹配
        if let Some(ref category) = filter.category {
            condition = condition.add(listing::Column::Category.eq(category.clone()));
        }

        // city: 大小写不敏感子串匹配（跨数据库用 lower() 实现）
        if let Some(ref city) = filter.city {
            let pattern = format!("%{}%", city.to_lowercase());
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(listing::Column::City))).like(pattern),
            );
        }

        let db = &self.db;
        let models = retry::with_retry("load_filtered", self.retry_config, || async {
            listing::Entity::find()
                .filter(condition.clone())
                .order_by_desc(listing::Column::CreatedAt)
                .all(db)
                .await
        })
        .await
        .map_err(|e| ScrapTradeError::database_operation(format!("查询挂单列表失败: {}", e)))?;

        Ok(models.into_iter().map(model_to_listing).collect())
    }

    pub async fn count(&self) -> Result<u64> {
        let db = &self.db;
        retry::with_retry("count", self.retry_config, || async {
            listing::Entity::find().count(db).await
        })
        .await
        .map_err(|e| ScrapTradeError::database_operation(format!("统计挂单数量失败: {}", e)))
    }
}

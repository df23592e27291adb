//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations. Counter updates are
//! single-row atomic `x = x + 1` statements so concurrent reveals on the same
//! listing never lose an increment.

use sea_orm::{ConnectionTrait, EntityTrait, ExprTrait, sea_query::{Expr, Query}};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::listing_to_active_model;
use super::retry;
use crate::errors::{Result, ScrapTradeError};
use crate::storage::Listing;

use migration::entities::listing;

impl SeaOrmStorage {
    pub async fn insert(&self, record: &Listing) -> Result<()> {
        let db = &self.db;
        let active_model = listing_to_active_model(record);

        retry::with_retry(
            &format!("insert({})", record.id),
            self.retry_config,
            || async { listing::Entity::insert(active_model.clone()).exec(db).await },
        )
        .await
        .map_err(|e| ScrapTradeError::database_operation(format!("写入挂单失败: {}", e)))?;

        info!("Listing created: {}", record.id);
        Ok(())
    }

    /// 浏览计数 +1
    pub async fn increment_views(&self, id: &str) -> Result<()> {
        self.increment_counter(listing::Column::Views, id, "increment_views")
            .await
    }

    /// 联系方式揭示计数 +1
    pub async fn increment_clicks(&self, id: &str) -> Result<()> {
        self.increment_counter(listing::Column::Clicks, id, "increment_clicks")
            .await
    }

    async fn increment_counter(
        &self,
        column: listing::Column,
        id: &str,
        operation_name: &str,
    ) -> Result<()> {
        // 单条 UPDATE ... SET x = x + 1，由存储引擎保证原子性
        let stmt = Query::update()
            .table(listing::Entity)
            .value(column, Expr::col(column).add(1))
            .and_where(Expr::col(listing::Column::Id).eq(Expr::val(id)))
            .to_owned();

        let db = &self.db;
        let stmt_ref = &stmt;
        let result = retry::with_retry(operation_name, self.retry_config, || async {
            db.execute(stmt_ref).await
        })
        .await
        .map_err(|e| ScrapTradeError::database_operation(format!("计数更新失败: {}", e)))?;

        // 未匹配任何行说明 id 不存在，显式上报而不是静默成功
        if result.rows_affected() == 0 {
            return Err(ScrapTradeError::not_found(format!("挂单不存在: {}", id)));
        }

        Ok(())
    }
}

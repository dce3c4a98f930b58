//! 通用单条记录查找（get-or-404）

use super::SeaOrmStorage;
use crate::entity::ModelName;
use crate::errors::{AppError, Result};
use crate::models::{Lookup, NotFound};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QuerySelect, Value};
use tracing::debug;

/// 相等匹配条件列表
pub(crate) type Filters<E> = Vec<(<E as EntityTrait>::Column, Value)>;

impl SeaOrmStorage {
    /// 按相等条件查找唯一记录
    ///
    /// - 恰好一条：`Lookup::Found`
    /// - 没有：`Lookup::NotFound`，响应体键为实体的小写模型名
    /// - 多于一条：`AppError::MultipleObjectsReturned`
    pub(crate) async fn get_object<E>(&self, filters: Filters<E>) -> Result<Lookup<E::Model>>
    where
        E: EntityTrait + ModelName,
    {
        let condition = filters
            .into_iter()
            .fold(Condition::all(), |cond, (column, value)| {
                cond.add(column.eq(value))
            });

        // 取两条即可判断是否唯一
        let mut rows = E::find()
            .filter(condition)
            .limit(2_u64)
            .all(&self.db)
            .await
            .map_err(|e| {
                AppError::database_operation(format!("查询{}失败: {e}", E::MODEL_NAME))
            })?;

        match rows.len() {
            0 => {
                debug!("{} lookup matched no rows", E::MODEL_NAME);
                Ok(Lookup::NotFound(NotFound::new(E::MODEL_NAME)))
            }
            1 => Ok(Lookup::Found(rows.remove(0))),
            _ => Err(AppError::multiple_objects_returned(format!(
                "get() returned more than one {}",
                E::MODEL_NAME
            ))),
        }
    }
}

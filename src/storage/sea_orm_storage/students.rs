//! 学生存储操作

use super::SeaOrmStorage;
use super::lookup::Filters;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{AppError, Result};
use crate::models::{
    Lookup,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentFilter},
    },
};
use sea_orm::{ActiveModelTrait, ActiveValue::Unchanged, DbErr, EntityTrait, QueryOrder, Set};

fn student_filters(filter: StudentFilter) -> Filters<Students> {
    let mut filters = Vec::new();
    if let Some(id) = filter.id {
        filters.push((Column::Id, id.into()));
    }
    if let Some(name) = filter.name {
        filters.push((Column::Name, name.into()));
    }
    filters
}

impl SeaOrmStorage {
    /// 创建学生，created_at 由服务端写入
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            age: Set(req.age),
            dob: Set(req.dob),
            is_active: Set(req.is_active),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    pub async fn get_student_impl(&self, filter: StudentFilter) -> Result<Lookup<Student>> {
        let lookup = self.get_object::<Students>(student_filters(filter)).await?;
        Ok(lookup.map(|m| m.into_student()))
    }

    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 整体覆盖学生字段后保存
    pub async fn save_student_impl(&self, student: Student) -> Result<Student> {
        let model = ActiveModel {
            id: Unchanged(student.id),
            name: Set(student.name),
            age: Set(student.age),
            dob: Set(student.dob),
            is_active: Set(student.is_active),
            // created_at 只在创建时写入
            ..Default::default()
        };

        let result = model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                AppError::not_found(format!("学生 {} 不存在，无法保存", student.id))
            }
            e => AppError::database_operation(format!("保存学生失败: {e}")),
        })?;

        Ok(result.into_student())
    }

    /// 删除学生，选课记录由外键级联删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

//! 课程存储操作

use super::SeaOrmStorage;
use super::lookup::Filters;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{AppError, Result};
use crate::models::{
    Lookup,
    courses::{
        entities::Course,
        requests::{CourseFilter, CreateCourseRequest},
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

fn course_filters(filter: CourseFilter) -> Filters<Courses> {
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
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    pub async fn get_course_impl(&self, filter: CourseFilter) -> Result<Lookup<Course>> {
        let lookup = self.get_object::<Courses>(course_filters(filter)).await?;
        Ok(lookup.map(|m| m.into_course()))
    }

    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 删除课程，选课记录由外键级联删除
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

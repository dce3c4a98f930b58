//! 单条记录查找结果
//!
//! 查找要么命中一条记录，要么得到一个可直接作为 404 响应返回的 [`NotFound`]。
//! 调用方必须先区分两种情况再继续处理。

use actix_web::HttpResponse;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound(NotFound),
}

impl<T> Lookup<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound(nf) => Lookup::NotFound(nf),
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// 未找到记录，响应体为 `{"<model>": "Not found"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound {
    model_name: &'static str,
}

impl NotFound {
    pub fn new(model_name: &'static str) -> Self {
        Self { model_name }
    }

    pub fn model_name(&self) -> &'static str {
        self.model_name
    }

    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert(
            self.model_name.to_string(),
            Value::String("Not found".into()),
        );
        Value::Object(body)
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::NotFound().json(self.body())
    }
}

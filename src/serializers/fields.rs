//! 字段级校验
//!
//! [`FieldReader`] 从请求 JSON 对象中逐个读取字段，按字段类型做类型转换与校验，
//! 并把所有错误收集到 [`FieldErrors`] 中，一次返回全部字段的错误。
//!
//! 约定：每个读取方法在记录了错误时返回 `None`，否则返回 `Some`。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};

pub const NON_FIELD_ERRORS: &str = "non_field_errors";

const REQUIRED: &str = "This field is required.";
const NULL: &str = "This field may not be null.";
const BLANK: &str = "This field may not be blank.";
const INVALID_STRING: &str = "Not a valid string.";
const INVALID_INTEGER: &str = "A valid integer is required.";
const INVALID_BOOLEAN: &str = "Must be a valid boolean.";
const INVALID_DATE: &str = "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";
const INVALID_DATETIME: &str = "Datetime has wrong format. Use one of these formats instead: \
                                YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z].";
const MAX_STRING_LENGTH: &str = "String value too large.";

const TRUE_STRINGS: &[&str] = &["t", "y", "yes", "true", "on", "1"];
const FALSE_STRINGS: &[&str] = &["f", "n", "no", "false", "off", "0"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// 按字段聚合的校验错误，序列化为 `{"field": ["message", ...]}`
///
/// 键按首次出现的顺序输出，与字段声明顺序一致。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 非字段级错误（例如请求体不是对象）
    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(NON_FIELD_ERRORS, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.0.push((field.to_string(), vec![message])),
        }
    }

    /// 外键指向的记录不存在
    pub fn add_invalid_pk(&mut self, field: &str, pk: i64) {
        self.add(field, format!("Invalid pk \"{pk}\" - object does not exist."));
    }

    /// 按声明顺序重排，未声明的键排在最后
    pub fn sort_by_declaration(&mut self, fields: &[&str]) {
        self.0.sort_by_key(|(name, _)| {
            fields
                .iter()
                .position(|field| field == name)
                .unwrap_or(fields.len())
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, messages) in &self.0 {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// 错误信息中使用的类型名
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let s = s.trim();
            // 允许 "12.000" 这种小数部分全为 0 的写法
            let digits = match s.split_once('.') {
                Some((int_part, frac)) if frac.chars().all(|c| c == '0') => int_part,
                Some(_) => return None,
                None => s,
            };
            digits.parse().ok()
        }
        _ => None,
    }
}

fn parse_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 1.0 => Some(true),
            Some(f) if f == 0.0 => Some(false),
            _ => None,
        },
        Value::String(s) => {
            let lowered = s.to_ascii_lowercase();
            if TRUE_STRINGS.contains(&lowered.as_str()) {
                Some(true)
            } else if FALSE_STRINGS.contains(&lowered.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// 读取类型正确的外键值，字段缺失、为 null 或类型不符时为 `None`
///
/// 用于在字段校验之外检查被引用记录是否存在。
pub fn primary_key_value(data: &Value, name: &str) -> Option<i64> {
    match data.get(name)? {
        Value::Null | Value::Bool(_) => None,
        value => parse_integer(value),
    }
}

/// 请求体字段读取器
pub struct FieldReader<'a> {
    data: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    /// 请求体必须是 JSON 对象
    pub fn new(data: &'a Value) -> Result<Self, FieldErrors> {
        match data {
            Value::Object(map) => Ok(Self {
                data: map,
                errors: FieldErrors::new(),
            }),
            other => Err(FieldErrors::non_field(format!(
                "Invalid data. Expected a dictionary, but got {}.",
                type_name(other)
            ))),
        }
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    fn fail<T>(&mut self, name: &str, message: impl Into<String>) -> Option<T> {
        self.errors.add(name, message);
        None
    }

    /// 读取必填且不可为 null 的原始值
    fn required(&mut self, name: &str) -> Option<&'a Value> {
        let data = self.data;
        match data.get(name) {
            None => self.fail(name, REQUIRED),
            Some(Value::Null) => self.fail(name, NULL),
            Some(value) => Some(value),
        }
    }

    fn string_value(&mut self, name: &str, value: &Value) -> Option<String> {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return self.fail(name, INVALID_STRING),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.fail(name, BLANK);
        }
        Some(trimmed.to_string())
    }

    /// 短文本字段，限制最大字符数
    pub fn char(&mut self, name: &str, max_length: usize) -> Option<String> {
        let value = self.required(name)?;
        let s = self.string_value(name, value)?;
        if s.chars().count() > max_length {
            return self.fail(
                name,
                format!("Ensure this field has no more than {max_length} characters."),
            );
        }
        Some(s)
    }

    /// 长文本字段
    pub fn text(&mut self, name: &str) -> Option<String> {
        let value = self.required(name)?;
        self.string_value(name, value)
    }

    pub fn integer(&mut self, name: &str) -> Option<i64> {
        let value = self.required(name)?;
        if let Value::String(s) = value
            && s.len() > 1000
        {
            return self.fail(name, MAX_STRING_LENGTH);
        }
        match parse_integer(value) {
            Some(n) => Some(n),
            None => self.fail(name, INVALID_INTEGER),
        }
    }

    /// 数据库 INTEGER 列，额外校验 32 位范围
    pub fn integer_i32(&mut self, name: &str) -> Option<i32> {
        let n = self.integer(name)?;
        if n > i64::from(i32::MAX) {
            return self.fail(
                name,
                format!("Ensure this value is less than or equal to {}.", i32::MAX),
            );
        }
        if n < i64::from(i32::MIN) {
            return self.fail(
                name,
                format!("Ensure this value is greater than or equal to {}.", i32::MIN),
            );
        }
        Some(n as i32)
    }

    /// 可选布尔字段，缺省时使用默认值
    pub fn boolean(&mut self, name: &str, default: bool) -> Option<bool> {
        let data = self.data;
        match data.get(name) {
            None => Some(default),
            Some(Value::Null) => self.fail(name, NULL),
            Some(value) => match parse_boolean(value) {
                Some(b) => Some(b),
                None => self.fail(name, INVALID_BOOLEAN),
            },
        }
    }

    pub fn date(&mut self, name: &str) -> Option<NaiveDate> {
        let value = self.required(name)?;
        match value
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        {
            Some(date) => Some(date),
            None => self.fail(name, INVALID_DATE),
        }
    }

    pub fn datetime(&mut self, name: &str) -> Option<DateTime<Utc>> {
        let value = self.required(name)?;
        match value.as_str().and_then(parse_datetime) {
            Some(dt) => Some(dt),
            None => self.fail(name, INVALID_DATETIME),
        }
    }

    fn pk_value(&mut self, name: &str, value: &Value) -> Option<i64> {
        let pk = match value {
            Value::Bool(_) => None,
            other => parse_integer(other),
        };
        match pk {
            Some(pk) => Some(pk),
            None => self.fail(
                name,
                format!(
                    "Incorrect type. Expected pk value, received {}.",
                    type_name(value)
                ),
            ),
        }
    }

    /// 必填外键，仅校验类型；记录是否存在由调用方检查
    pub fn primary_key(&mut self, name: &str) -> Option<i64> {
        let value = self.required(name)?;
        self.pk_value(name, value)
    }

    /// 可空外键，缺省或 null 时为 `Some(None)`
    pub fn nullable_primary_key(&mut self, name: &str) -> Option<Option<i64>> {
        let data = self.data;
        match data.get(name) {
            None | Some(Value::Null) => Some(None),
            Some(value) => self.pk_value(name, value).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_payload() {
        let errors = FieldReader::new(&json!([1, 2])).err().unwrap();
        assert_eq!(
            errors.get(NON_FIELD_ERRORS).unwrap(),
            ["Invalid data. Expected a dictionary, but got list."]
        );
    }

    #[test]
    fn test_char_field_rules() {
        let data = json!({"a": "  hi  ", "b": "   ", "c": true, "d": 42, "e": "x".repeat(101)});
        let mut reader = FieldReader::new(&data).unwrap();
        assert_eq!(reader.char("a", 100).as_deref(), Some("hi"));
        assert_eq!(reader.char("b", 100), None);
        assert_eq!(reader.char("c", 100), None);
        assert_eq!(reader.char("d", 100).as_deref(), Some("42"));
        assert_eq!(reader.char("e", 100), None);
        assert_eq!(reader.char("missing", 100), None);

        let errors = reader.into_errors();
        assert_eq!(errors.get("b").unwrap(), [BLANK]);
        assert_eq!(errors.get("c").unwrap(), [INVALID_STRING]);
        assert_eq!(
            errors.get("e").unwrap(),
            ["Ensure this field has no more than 100 characters."]
        );
        assert_eq!(errors.get("missing").unwrap(), [REQUIRED]);
        assert!(!errors.contains("a"));
        assert!(!errors.contains("d"));
    }

    #[test]
    fn test_integer_coercion() {
        let data = json!({"a": 7, "b": "12", "c": 3.0, "d": "4.00", "e": 2.5, "f": "abc", "g": true});
        let mut reader = FieldReader::new(&data).unwrap();
        assert_eq!(reader.integer("a"), Some(7));
        assert_eq!(reader.integer("b"), Some(12));
        assert_eq!(reader.integer("c"), Some(3));
        assert_eq!(reader.integer("d"), Some(4));
        assert_eq!(reader.integer("e"), None);
        assert_eq!(reader.integer("f"), None);
        assert_eq!(reader.integer("g"), None);
        let errors = reader.into_errors();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("f").unwrap(), [INVALID_INTEGER]);
    }

    #[test]
    fn test_integer_i32_bounds() {
        let data = json!({"big": 3_000_000_000_i64, "ok": -5});
        let mut reader = FieldReader::new(&data).unwrap();
        assert_eq!(reader.integer_i32("big"), None);
        assert_eq!(reader.integer_i32("ok"), Some(-5));
        assert_eq!(
            reader.into_errors().get("big").unwrap(),
            ["Ensure this value is less than or equal to 2147483647."]
        );
    }

    #[test]
    fn test_boolean_default_and_spellings() {
        let data = json!({"a": "yes", "b": 0, "c": "maybe", "d": null});
        let mut reader = FieldReader::new(&data).unwrap();
        assert_eq!(reader.boolean("a", false), Some(true));
        assert_eq!(reader.boolean("b", true), Some(false));
        assert_eq!(reader.boolean("c", true), None);
        assert_eq!(reader.boolean("d", true), None);
        assert_eq!(reader.boolean("absent", true), Some(true));
        let errors = reader.into_errors();
        assert_eq!(errors.get("c").unwrap(), [INVALID_BOOLEAN]);
        assert_eq!(errors.get("d").unwrap(), [NULL]);
    }

    #[test]
    fn test_date_and_datetime() {
        let data = json!({
            "dob": "2001-09-11",
            "bad": "11/09/2001",
            "at": "2024-03-01T08:30:00+08:00",
            "naive": "2024-03-01T08:30",
            "worse": 5
        });
        let mut reader = FieldReader::new(&data).unwrap();
        assert_eq!(
            reader.date("dob"),
            NaiveDate::from_ymd_opt(2001, 9, 11)
        );
        assert_eq!(reader.date("bad"), None);
        assert_eq!(
            reader.datetime("at").unwrap().to_rfc3339(),
            "2024-03-01T00:30:00+00:00"
        );
        assert_eq!(
            reader.datetime("naive").unwrap().to_rfc3339(),
            "2024-03-01T08:30:00+00:00"
        );
        assert_eq!(reader.datetime("worse"), None);
        let errors = reader.into_errors();
        assert_eq!(errors.get("bad").unwrap(), [INVALID_DATE]);
        assert_eq!(errors.get("worse").unwrap(), [INVALID_DATETIME]);
    }

    #[test]
    fn test_primary_keys() {
        let data = json!({"a": 3, "b": "4", "c": "x", "d": null});
        let mut reader = FieldReader::new(&data).unwrap();
        assert_eq!(reader.primary_key("a"), Some(3));
        assert_eq!(reader.primary_key("b"), Some(4));
        assert_eq!(reader.primary_key("c"), None);
        assert_eq!(reader.primary_key("d"), None);
        assert_eq!(reader.nullable_primary_key("d"), Some(None));
        assert_eq!(reader.nullable_primary_key("absent"), Some(None));
        assert_eq!(reader.nullable_primary_key("a"), Some(Some(3)));
        let errors = reader.into_errors();
        assert_eq!(
            errors.get("c").unwrap(),
            ["Incorrect type. Expected pk value, received str."]
        );
        assert_eq!(errors.get("d").unwrap(), [NULL]);
    }

    #[test]
    fn test_field_errors_keep_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.add("title", BLANK);
        errors.add_invalid_pk("author", 42);
        errors.add("title", MAX_STRING_LENGTH);
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"title":["This field may not be blank.","String value too large."],"author":["Invalid pk \"42\" - object does not exist."]}"#
        );
    }

    #[test]
    fn test_sort_by_declaration() {
        let mut errors = FieldErrors::new();
        errors.add(NON_FIELD_ERRORS, "x");
        errors.add("enroll_date", INVALID_DATETIME);
        errors.add_invalid_pk("student", 1);
        errors.sort_by_declaration(&["student", "course", "enroll_date", "is_active"]);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            ["student", "enroll_date", NON_FIELD_ERRORS]
        );
    }

    #[test]
    fn test_primary_key_value() {
        let data = json!({"a": 3, "b": "4", "c": "x", "d": null, "e": true});
        assert_eq!(primary_key_value(&data, "a"), Some(3));
        assert_eq!(primary_key_value(&data, "b"), Some(4));
        assert_eq!(primary_key_value(&data, "c"), None);
        assert_eq!(primary_key_value(&data, "d"), None);
        assert_eq!(primary_key_value(&data, "e"), None);
        assert_eq!(primary_key_value(&data, "absent"), None);
        assert_eq!(primary_key_value(&json!([1]), "a"), None);
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.add("name", REQUIRED);
        errors.add_invalid_pk("student", 9);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "name": ["This field is required."],
                "student": ["Invalid pk \"9\" - object does not exist."]
            })
        );
    }
}

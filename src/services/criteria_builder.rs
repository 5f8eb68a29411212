//! Criteria builder
//!
//! Turns the loosely typed argument map of a tool call into validated criteria. The
//! map is decoded once into an argument struct whose fields accept any JSON scalar;
//! each field is then checked in a fixed order so the first failing field is
//! deterministic.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::errors::ValidationError;
use crate::domain::models::timestamp::parse_timestamp;
use crate::domain::models::{
    ArgumentMap, CatalogCriteria, CatalogOrderBy, CatalogStatus, CatalogType, ContentCriteria,
    ContentSite, Money, Pagination, PostOrderBy, PostStatus, SearchCredentials, SortOrder,
    StockStatus,
};

/// One argument value as sent by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Text(String),
    Flag(bool),
    Number(serde_json::Number),
    Structured(Value),
}

impl ArgValue {
    /// String form of a scalar; `None` for arrays and objects.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Flag(flag) => Some(flag.to_string()),
            Self::Number(number) => Some(number.to_string()),
            Self::Structured(_) => None,
        }
    }
}

/// Arguments of the `search_products` tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogSearchArgs {
    pub base_url: Option<ArgValue>,
    pub consumer_key: Option<ArgValue>,
    pub consumer_secret: Option<ArgValue>,
    pub search: Option<ArgValue>,
    pub category: Option<ArgValue>,
    pub tag: Option<ArgValue>,
    pub status: Option<ArgValue>,
    #[serde(rename = "type")]
    pub item_type: Option<ArgValue>,
    pub featured: Option<ArgValue>,
    pub on_sale: Option<ArgValue>,
    pub min_price: Option<ArgValue>,
    pub max_price: Option<ArgValue>,
    pub stock_status: Option<ArgValue>,
    pub per_page: Option<ArgValue>,
    pub page: Option<ArgValue>,
    #[serde(rename = "orderby")]
    pub order_by: Option<ArgValue>,
    pub order: Option<ArgValue>,
}

/// Arguments of the `search_posts` tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentSearchArgs {
    pub base_url: Option<ArgValue>,
    pub search: Option<ArgValue>,
    pub status: Option<ArgValue>,
    pub author: Option<ArgValue>,
    pub categories: Option<ArgValue>,
    pub tags: Option<ArgValue>,
    pub before: Option<ArgValue>,
    pub after: Option<ArgValue>,
    pub per_page: Option<ArgValue>,
    pub page: Option<ArgValue>,
    #[serde(rename = "orderby")]
    pub order_by: Option<ArgValue>,
    pub order: Option<ArgValue>,
}

impl CatalogSearchArgs {
    pub fn from_arguments(arguments: &ArgumentMap) -> Result<Self, ValidationError> {
        decode(arguments)
    }
}

impl ContentSearchArgs {
    pub fn from_arguments(arguments: &ArgumentMap) -> Result<Self, ValidationError> {
        decode(arguments)
    }
}

fn decode<T: for<'de> Deserialize<'de>>(arguments: &ArgumentMap) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|err| ValidationError::invalid("arguments", err.to_string()))
}

/// Which searchable domain a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDomain {
    Catalog,
    Content,
}

/// Output of [`CriteriaBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltCriteria {
    Catalog {
        criteria: CatalogCriteria,
        credentials: SearchCredentials,
    },
    Content {
        criteria: ContentCriteria,
        site: ContentSite,
    },
}

/// Stateless argument validation for both domains.
pub struct CriteriaBuilder;

impl CriteriaBuilder {
    /// Validate `arguments` for `domain`, reporting the first failing field.
    pub fn build(domain: SearchDomain, arguments: &ArgumentMap) -> Result<BuiltCriteria, ValidationError> {
        match domain {
            SearchDomain::Catalog => {
                let (criteria, credentials) =
                    Self::catalog(&CatalogSearchArgs::from_arguments(arguments)?)?;
                Ok(BuiltCriteria::Catalog {
                    criteria,
                    credentials,
                })
            }
            SearchDomain::Content => {
                let (criteria, site) = Self::content(&ContentSearchArgs::from_arguments(arguments)?)?;
                Ok(BuiltCriteria::Content { criteria, site })
            }
        }
    }

    /// Credentials are checked first, then filters, then pagination and sort.
    pub fn catalog(
        args: &CatalogSearchArgs,
    ) -> Result<(CatalogCriteria, SearchCredentials), ValidationError> {
        let base_url = required_text("base_url", args.base_url.as_ref())?;
        let consumer_key = required_text("consumer_key", args.consumer_key.as_ref())?;
        let consumer_secret = required_text("consumer_secret", args.consumer_secret.as_ref())?;

        let search = optional_text("search", args.search.as_ref())?;
        let category = optional_text("category", args.category.as_ref())?;
        let tag = optional_text("tag", args.tag.as_ref())?;
        let status = optional_choice(
            "status",
            args.status.as_ref(),
            CatalogStatus::parse,
            CatalogStatus::wire_values,
        )?;
        let item_type = optional_choice(
            "type",
            args.item_type.as_ref(),
            CatalogType::parse,
            CatalogType::wire_values,
        )?;
        let featured = optional_flag("featured", args.featured.as_ref())?;
        let on_sale = optional_flag("on_sale", args.on_sale.as_ref())?;
        let min_price = optional_money("min_price", args.min_price.as_ref())?;
        let max_price = optional_money("max_price", args.max_price.as_ref())?;
        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                return Err(ValidationError::invalid(
                    "min_price",
                    format!("must not exceed max_price ({max})"),
                ));
            }
        }
        let stock_status = optional_choice(
            "stock_status",
            args.stock_status.as_ref(),
            StockStatus::parse,
            StockStatus::wire_values,
        )?;
        let pagination = pagination(args.per_page.as_ref(), args.page.as_ref())?;
        let order_by = optional_choice(
            "orderby",
            args.order_by.as_ref(),
            CatalogOrderBy::parse,
            CatalogOrderBy::wire_values,
        )?
        .unwrap_or_default();
        let order = sort_order(args.order.as_ref())?;

        let criteria = CatalogCriteria {
            search,
            category,
            tag,
            status,
            item_type,
            featured,
            on_sale,
            min_price,
            max_price,
            stock_status,
            pagination,
            order_by,
            order,
        };
        let credentials = SearchCredentials::new(base_url, consumer_key, consumer_secret);
        Ok((criteria, credentials))
    }

    pub fn content(args: &ContentSearchArgs) -> Result<(ContentCriteria, ContentSite), ValidationError> {
        let base_url = required_text("base_url", args.base_url.as_ref())?;

        let search = optional_text("search", args.search.as_ref())?;
        let status = optional_choice(
            "status",
            args.status.as_ref(),
            PostStatus::parse,
            PostStatus::wire_values,
        )?;
        let author = optional_positive("author", args.author.as_ref())?;
        let categories = id_list("categories", args.categories.as_ref())?;
        let tags = id_list("tags", args.tags.as_ref())?;
        let before = optional_datetime("before", args.before.as_ref())?;
        let after = optional_datetime("after", args.after.as_ref())?;
        let pagination = pagination(args.per_page.as_ref(), args.page.as_ref())?;
        let order_by = optional_choice(
            "orderby",
            args.order_by.as_ref(),
            PostOrderBy::parse,
            PostOrderBy::wire_values,
        )?
        .unwrap_or_default();
        let order = sort_order(args.order.as_ref())?;

        let criteria = ContentCriteria {
            search,
            status,
            author,
            categories,
            tags,
            before,
            after,
            pagination,
            order_by,
            order,
        };
        Ok((criteria, ContentSite::new(base_url)))
    }
}

/// Present, scalar and non-blank, or `None`. Returned exactly as sent, since
/// credentials and search terms are forwarded untouched.
fn optional_text(field: &str, value: Option<&ArgValue>) -> Result<Option<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let text = value
        .to_text()
        .ok_or_else(|| ValidationError::invalid(field, "must be a string, number or boolean"))?;
    Ok((!text.trim().is_empty()).then_some(text))
}

/// Trimmed form of [`optional_text`] for values that are parsed, not forwarded.
fn optional_token(field: &str, value: Option<&ArgValue>) -> Result<Option<String>, ValidationError> {
    Ok(optional_text(field, value)?.map(|text| text.trim().to_string()))
}

fn required_text(field: &str, value: Option<&ArgValue>) -> Result<String, ValidationError> {
    optional_text(field, value)?.ok_or_else(|| ValidationError::missing(field))
}

fn optional_choice<E>(
    field: &str,
    value: Option<&ArgValue>,
    parse: fn(&str) -> Option<E>,
    allowed: fn() -> Vec<&'static str>,
) -> Result<Option<E>, ValidationError> {
    let Some(text) = optional_token(field, value)? else {
        return Ok(None);
    };
    parse(&text).map(Some).ok_or_else(|| {
        ValidationError::invalid(
            field,
            format!("'{text}' is not one of: {}", allowed().join(", ")),
        )
    })
}

fn optional_flag(field: &str, value: Option<&ArgValue>) -> Result<Option<bool>, ValidationError> {
    match optional_token(field, value)?.as_deref() {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(ValidationError::invalid(
            field,
            format!("must be true or false, got '{other}'"),
        )),
    }
}

fn optional_money(field: &str, value: Option<&ArgValue>) -> Result<Option<Money>, ValidationError> {
    let Some(text) = optional_token(field, value)? else {
        return Ok(None);
    };
    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount < 0.0 => Err(ValidationError::invalid(
            field,
            format!("must not be negative, got '{text}'"),
        )),
        _ => Money::parse(&text).map(Some).ok_or_else(|| {
            ValidationError::invalid(field, format!("invalid price format '{text}'"))
        }),
    }
}

fn optional_positive(field: &str, value: Option<&ArgValue>) -> Result<Option<u64>, ValidationError> {
    let Some(text) = optional_token(field, value)? else {
        return Ok(None);
    };
    match text.parse::<u64>() {
        Ok(number) if number > 0 => Ok(Some(number)),
        _ => Err(ValidationError::invalid(
            field,
            format!("must be a positive integer, got '{text}'"),
        )),
    }
}

/// `per_page` overflow is clamped; a bad `page` is an error.
fn pagination(per_page: Option<&ArgValue>, page: Option<&ArgValue>) -> Result<Pagination, ValidationError> {
    let per_page = optional_positive("per_page", per_page)?
        .map_or(Pagination::DEFAULT_PER_PAGE, |n| {
            u32::try_from(n).unwrap_or(u32::MAX)
        });
    let page = match optional_positive("page", page)? {
        None => Pagination::DEFAULT_PAGE,
        Some(n) => u32::try_from(n)
            .map_err(|_| ValidationError::invalid("page", format!("must be at most {}", u32::MAX)))?,
    };
    Ok(Pagination::new(page, per_page))
}

fn sort_order(value: Option<&ArgValue>) -> Result<SortOrder, ValidationError> {
    Ok(optional_choice("order", value, SortOrder::parse, SortOrder::wire_values)?.unwrap_or_default())
}

/// Comma-separated IDs (`"3, 7"`) or a JSON array of IDs.
fn id_list(field: &str, value: Option<&ArgValue>) -> Result<Vec<u64>, ValidationError> {
    let invalid = |raw: &str| {
        ValidationError::invalid(
            field,
            format!("must be a comma-separated list of positive integers, got '{raw}'"),
        )
    };
    let parts: Vec<String> = match value {
        None => return Ok(Vec::new()),
        Some(ArgValue::Structured(Value::Array(items))) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(invalid(&other.to_string())),
            })
            .collect::<Result<_, _>>()?,
        Some(_) => match optional_text(field, value)? {
            None => return Ok(Vec::new()),
            Some(text) => text.split(',').map(str::to_string).collect(),
        },
    };

    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(invalid(part)),
        })
        .collect()
}

fn optional_datetime(field: &str, value: Option<&ArgValue>) -> Result<Option<String>, ValidationError> {
    let Some(text) = optional_token(field, value)? else {
        return Ok(None);
    };
    let valid = parse_timestamp(&text).is_some()
        || NaiveDate::parse_from_str(&text, "%Y-%m-%d").is_ok();
    if valid {
        Ok(Some(text))
    } else {
        Err(ValidationError::invalid(
            field,
            format!("must be an ISO-8601 date or datetime, got '{text}'"),
        ))
    }
}

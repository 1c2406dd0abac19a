//! Shared descriptors for facade tests.

#![allow(dead_code)]

use async_trait::async_trait;
use purestate::model::{
    Attributes, AttributesExt, Collection, Comparator, Fetch, GenericModel, MethodTable, Model,
    ModelError, ModelResult, Options, models_from,
};
use serde_json::{Value, json};

pub const BRAND: &str = "Ashton Martine";

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Converts a `json!` object literal into attributes.
pub fn attrs(value: Value) -> Attributes {
    value
        .as_object()
        .cloned()
        .expect("fixture attributes must be a JSON object")
}

/// Stand-in for a remote endpoint: echoes the requested url.
async fn respond(url: &str) -> ModelResult<Value> {
    tokio::task::yield_now().await;
    if url.contains("offline") {
        return Err(ModelError::Fetch(format!("{url}: connection refused")));
    }
    Ok(json!({ "foo": "bar", "url": url }))
}

fn car_defaults() -> Attributes {
    attrs(json!({
        "color": "white",
        "year": 2015,
        "seats": 5,
        "kilometers": 0,
    }))
}

/// A car: defaults, a GTX edition has four seats, and it can be driven.
#[derive(Debug, Clone)]
pub struct Car {
    attributes: Attributes,
    url_root: String,
}

impl Car {
    fn url(&self) -> String {
        format!(
            "{}/year/{}/seats/{}",
            self.url_root,
            self.attributes.get_i64("/year").unwrap_or_default(),
            self.attributes.get_i64("/seats").unwrap_or_default(),
        )
    }
}

fn drive(car: &mut Car, args: &[Value]) -> ModelResult<Value> {
    let distance = match args.first() {
        None | Some(Value::Null) => 10,
        Some(v) => v.as_i64().ok_or_else(|| {
            ModelError::method("drive", format!("distance must be an integer, got {v}"))
        })?,
    };
    let kilometers = car.attributes.get_i64("/kilometers").unwrap_or_default() + distance;
    car.attributes.insert("kilometers".into(), json!(kilometers));
    Ok(json!(kilometers))
}

fn repaint(car: &mut Car, args: &[Value]) -> ModelResult<Value> {
    let color = args.first().cloned().unwrap_or(Value::Null);
    Ok(car
        .attributes
        .insert("color".into(), color)
        .unwrap_or(Value::Null))
}

impl Model for Car {
    fn name() -> &'static str {
        "Car"
    }

    fn construct(attrs: Attributes, opts: Option<&Options>) -> ModelResult<Self> {
        let mut attributes = attrs.with_defaults(&car_defaults());
        if !attributes.get("year").is_some_and(Value::is_number) {
            return Err(ModelError::validation("year", "must be a number"));
        }
        if attributes.get_str("/edition") == Some("GTX") {
            attributes.insert("seats".into(), json!(4));
        }
        let url_root = opts
            .and_then(|o| o.get("url_root"))
            .and_then(Value::as_str)
            .unwrap_or("foo")
            .to_string();
        Ok(Self {
            attributes,
            url_root,
        })
    }

    /// Unwraps a `{"car": {...}}` server envelope; other envelope keys are
    /// kept underneath.
    fn parse(mut attrs: Attributes) -> ModelResult<Attributes> {
        match attrs.remove("car") {
            Some(Value::Object(inner)) => Ok(attrs.merged(&inner)),
            Some(other) => Err(ModelError::validation("car", format!("not an object: {other}"))),
            None => Ok(attrs),
        }
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn methods() -> MethodTable<Self> {
        MethodTable::new()
            .with("drive", drive)
            .with("repaint", repaint)
    }
}

#[async_trait]
impl Fetch for Car {
    async fn fetch(&mut self) -> ModelResult<()> {
        let url = self.url();
        let server = respond(&url).await?;
        self.attributes.insert("serverAttrs".into(), server);
        Ok(())
    }
}

fn branded(items: Vec<Value>) -> Vec<Value> {
    items
        .into_iter()
        .map(|mut item| {
            if let Some(obj) = item.as_object_mut() {
                obj.insert("brand".into(), json!(BRAND));
            }
            item
        })
        .collect()
}

/// Cars of one brand. Every item gets the brand stamped at construction.
#[derive(Debug)]
pub struct CarCollection {
    models: Vec<Car>,
    comparator: Option<Comparator>,
    url: String,
}

impl Collection for CarCollection {
    type Item = Car;

    fn name() -> &'static str {
        "CarCollection"
    }

    fn construct(items: Vec<Value>, opts: Option<&Options>) -> ModelResult<Self> {
        Ok(Self {
            models: models_from(branded(items), opts)?,
            comparator: opts
                .and_then(|o| o.comparator.clone())
                .map(Comparator::Attribute),
            url: opts
                .and_then(|o| o.get("url"))
                .and_then(Value::as_str)
                .unwrap_or("bar/brand/Ashton-Martine")
                .to_string(),
        })
    }

    fn models(&self) -> &[Car] {
        &self.models
    }

    fn models_mut(&mut self) -> &mut Vec<Car> {
        &mut self.models
    }

    fn comparator(&self) -> Option<&Comparator> {
        self.comparator.as_ref()
    }
}

#[async_trait]
impl Fetch for CarCollection {
    async fn fetch(&mut self) -> ModelResult<()> {
        let server = respond(&self.url).await?;
        let car = Car::construct(attrs(json!({ "serverAttrs": server })), None)?;
        self.models = vec![car];
        Ok(())
    }
}

/// [`CarCollection`] kept in ascending `year` order.
#[derive(Debug)]
pub struct SortedCarCollection {
    models: Vec<Car>,
    comparator: Comparator,
}

impl Collection for SortedCarCollection {
    type Item = Car;

    fn name() -> &'static str {
        "SortedCarCollection"
    }

    fn construct(items: Vec<Value>, opts: Option<&Options>) -> ModelResult<Self> {
        Ok(Self {
            models: models_from(branded(items), opts)?,
            comparator: Comparator::attribute("year"),
        })
    }

    fn models(&self) -> &[Car] {
        &self.models
    }

    fn models_mut(&mut self) -> &mut Vec<Car> {
        &mut self.models
    }

    fn comparator(&self) -> Option<&Comparator> {
        Some(&self.comparator)
    }
}

/// A collection with no item specialization.
#[derive(Debug)]
pub struct PlainCollection {
    models: Vec<GenericModel>,
}

impl Collection for PlainCollection {
    type Item = GenericModel;

    fn construct(items: Vec<Value>, opts: Option<&Options>) -> ModelResult<Self> {
        Ok(Self {
            models: models_from(items, opts)?,
        })
    }

    fn models(&self) -> &[GenericModel] {
        &self.models
    }

    fn models_mut(&mut self) -> &mut Vec<GenericModel> {
        &mut self.models
    }
}

pub fn test_cars() -> Vec<Value> {
    vec![
        json!({ "color": "indigo", "edition": "GTX", "year": 2015 }),
        json!({ "color": "blue", "year": 2013, "seats": 3 }),
    ]
}

//! Shared JSON fixtures for unit tests.

use serde_json::{Value, json};

/// Fields varied across record fixtures; everything else is fixed.
#[derive(Debug, Clone)]
pub(crate) struct RecordShape {
    pub(crate) gender: &'static str,
    pub(crate) title: &'static str,
    pub(crate) first: &'static str,
    pub(crate) last: &'static str,
    pub(crate) age: u32,
    pub(crate) medium: &'static str,
}

impl Default for RecordShape {
    fn default() -> Self {
        Self {
            gender: "male",
            title: "Mr",
            first: "John",
            last: "Smith",
            age: 34,
            medium: "http://x/m.jpg",
        }
    }
}

pub(crate) fn record_value(shape: &RecordShape) -> Value {
    json!({
        "gender": shape.gender,
        "name": { "title": shape.title, "first": shape.first, "last": shape.last },
        "location": {
            "street": { "number": 12, "name": "Calle Mayor" },
            "city": "Madrid",
            "state": "Comunidad de Madrid",
            "country": "Spain",
            "postcode": 28013,
            "coordinates": { "latitude": "40.4168", "longitude": "-3.7038" },
            "timezone": { "offset": "+1:00", "description": "Brussels, Copenhagen, Madrid, Paris" }
        },
        "email": "john.smith@example.com",
        "login": {
            "uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf00",
            "username": "bluecat123",
            "password": "hunter",
            "salt": "Qx4lG1pS",
            "md5": "0f6e6c1c1d9d3b8f2e1a7c4b5d6e7f80",
            "sha1": "3b1f1c0c2d5e9a8b7c6d5e4f3a2b1c0d9e8f7a6b",
            "sha256": "9d5ed678fe57bcca610140957afab571e2d3f6f5b1d7b0e0c7d6a5b4c3d2e1f0"
        },
        "dob": { "date": "1990-03-10T08:00:00.000Z", "age": shape.age },
        "registered": { "date": "2010-06-01T12:00:00.000Z", "age": 14 },
        "phone": "912-345-678",
        "cell": "612-345-678",
        "id": { "name": "DNI", "value": "12345678-Z" },
        "picture": {
            "large": "http://x/l.jpg",
            "medium": shape.medium,
            "thumbnail": "http://x/t.jpg"
        },
        "nat": "ES"
    })
}

pub(crate) fn body_with(shapes: &[RecordShape]) -> String {
    let results: Vec<Value> = shapes.iter().map(record_value).collect();
    json!({ "results": results }).to_string()
}

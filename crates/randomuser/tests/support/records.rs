//! Upstream record builders shared by integration tests.

use serde_json::{Value, json};

/// Build one upstream record with the given name, age, and medium picture.
#[must_use]
pub fn user_value(title: &str, first: &str, last: &str, age: u32, medium: &str) -> Value {
    json!({
        "gender": "male",
        "name": { "title": title, "first": first, "last": last },
        "location": {
            "street": { "number": 4521, "name": "Avenida de Andalucía" },
            "city": "Zaragoza",
            "state": "Aragón",
            "country": "Spain",
            "postcode": 50001,
            "coordinates": { "latitude": "41.6488", "longitude": "-0.8891" },
            "timezone": { "offset": "+1:00", "description": "Brussels, Copenhagen, Madrid, Paris" }
        },
        "email": "user@example.com",
        "login": {
            "uuid": "2f1c5b6e-8f0a-4c4b-9f5e-0d2b3c4a5e6f",
            "username": "tinyrabbit401",
            "password": "mustang",
            "salt": "9wHRDmLq",
            "md5": "d8c8a0f5c2d2b1a0e9f8e7d6c5b4a392",
            "sha1": "a1b2c3d4e5f60718293a4b5c6d7e8f9012345678",
            "sha256": "0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0"
        },
        "dob": { "date": "1989-11-24T17:31:02.511Z", "age": age },
        "registered": { "date": "2008-04-19T07:12:45.993Z", "age": 16 },
        "phone": "978-123-456",
        "cell": "678-123-456",
        "id": { "name": "DNI", "value": "58172694-P" },
        "picture": {
            "large": "https://randomuser.me/api/portraits/men/1.jpg",
            "medium": medium,
            "thumbnail": "https://randomuser.me/api/portraits/thumb/men/1.jpg"
        },
        "nat": "ES"
    })
}

/// Wrap records in the `{"results": [...]}` envelope.
#[must_use]
pub fn results_body(users: Vec<Value>) -> String {
    json!({ "results": users }).to_string()
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
    pub name: String,
    pub age: u32,
}

impl Citizen {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub actors: Vec<String>,
}

impl Movie {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            actors: Vec::new(),
        }
    }

    pub fn add_actor(&mut self, actor: &str) {
        self.actors.push(actor.to_string());
    }
}

pub fn sample_citizens() -> Vec<Citizen> {
    vec![
        Citizen::new("Kuba", 50),
        Citizen::new("Blaz", 40),
        Citizen::new("Emilka", 20),
        Citizen::new("Kuba", 51),
    ]
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

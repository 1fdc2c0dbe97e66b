use std::fmt;
use serde::{Serialize, Deserialize};

use crate::{
    is_none_or_empty,
    ObjectId,
    Error,
    error::Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id      : ObjectId,
    name    : String,
    number  : String,
}

impl Contact {
    pub fn new(id: ObjectId, name: &str, number: &str) -> Self {
        Self {
            id,
            name    : name.to_string(),
            number  : number.to_string(),
        }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn with_number(&self, number: &str) -> NewContact {
        NewContact::new(&self.name, number)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.name, self.number, self.id)
    }
}

/// A contact not yet acknowledged by the service, i.e. without an id.
/// Also the body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name    : String,
    pub number  : String,
}

impl NewContact {
    pub fn new(name: &str, number: &str) -> Self {
        Self {
            name    : name.trim().to_string(),
            number  : number.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Argument("name is required".into()));
        }
        if self.number.trim().is_empty() {
            return Err(Error::Argument("number is required".into()));
        }
        Ok(())
    }

    pub fn into_contact(self, id: ObjectId) -> Contact {
        Contact {
            id,
            name    : self.name,
            number  : self.number,
        }
    }
}

/// Wire form of a contact request; missing fields are reported as 400
/// rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ContactRequest {
    #[serde(default)]
    name    : Option<String>,
    #[serde(default)]
    number  : Option<String>,
}

impl TryFrom<ContactRequest> for NewContact {
    type Error = Error;

    fn try_from(req: ContactRequest) -> Result<Self> {
        if is_none_or_empty(&req.name) {
            return Err(Error::Argument("name is required".into()));
        }
        if is_none_or_empty(&req.number) {
            return Err(Error::Argument("number is required".into()));
        }

        Ok(NewContact::new(
            req.name.as_deref().unwrap_or_default(),
            req.number.as_deref().unwrap_or_default()
        ))
    }
}

use crate::{
    model::{FieldKind, FieldModel, RecordModel},
    traits::{FieldValues, RecordKind},
    value::Value,
};
use std::cell::Cell;

///
/// Address
///

#[derive(Clone, Debug)]
pub(crate) struct Address {
    pub city: String,
    pub zip: String,
}

static ADDRESS_MODEL: RecordModel = RecordModel {
    name: "Address",
    fields: &[
        FieldModel {
            name: "city",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "zip",
            kind: FieldKind::Text,
        },
    ],
};

impl FieldValues for Address {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "city" => Some(Value::from(self.city.clone())),
            "zip" => Some(Value::from(self.zip.clone())),
            _ => None,
        }
    }
}

impl RecordKind for Address {
    const MODEL: &'static RecordModel = &ADDRESS_MODEL;
}

///
/// Customer
///

#[derive(Clone, Debug)]
pub(crate) struct Customer {
    pub name: String,
    pub age: u32,
    pub active: bool,
    pub tags: Vec<String>,
    pub address: Address,
}

static CUSTOMER_MODEL: RecordModel = RecordModel {
    name: "Customer",
    fields: &[
        FieldModel {
            name: "name",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "age",
            kind: FieldKind::Uint,
        },
        FieldModel {
            name: "active",
            kind: FieldKind::Bool,
        },
        FieldModel {
            name: "tags",
            kind: FieldKind::List(&FieldKind::Text),
        },
        FieldModel {
            name: "address",
            kind: FieldKind::Record(&ADDRESS_MODEL),
        },
    ],
};

impl FieldValues for Customer {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "name" => Some(Value::from(self.name.clone())),
            "age" => Some(Value::from(self.age)),
            "active" => Some(Value::from(self.active)),
            "tags" => Some(Value::from_slice(&self.tags)),
            "address" => Some(Value::from_fields(&self.address)),
            _ => None,
        }
    }
}

impl RecordKind for Customer {
    const MODEL: &'static RecordModel = &CUSTOMER_MODEL;
}

pub(crate) fn alice() -> Customer {
    Customer {
        name: "Alice".to_string(),
        age: 30,
        active: true,
        tags: vec!["vip".to_string(), "beta".to_string()],
        address: Address {
            city: "Louisville".to_string(),
            zip: "40202".to_string(),
        },
    }
}

pub(crate) fn bob() -> Customer {
    Customer {
        name: "Bob".to_string(),
        age: 17,
        active: false,
        tags: vec![],
        address: Address {
            city: "Reno".to_string(),
            zip: "89501".to_string(),
        },
    }
}

///
/// Probe
///
/// Record that counts reads of its `counted` field, used to observe
/// combinator short-circuiting. `zero` always reads as `Uint(0)`.
///

#[derive(Debug, Default)]
pub(crate) struct Probe {
    pub counted_reads: Cell<u32>,
}

static PROBE_MODEL: RecordModel = RecordModel {
    name: "Probe",
    fields: &[
        FieldModel {
            name: "zero",
            kind: FieldKind::Uint,
        },
        FieldModel {
            name: "counted",
            kind: FieldKind::Uint,
        },
    ],
};

impl FieldValues for Probe {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "zero" => Some(Value::Uint(0)),
            "counted" => {
                self.counted_reads.set(self.counted_reads.get() + 1);
                Some(Value::Uint(0))
            }
            _ => None,
        }
    }
}

impl RecordKind for Probe {
    const MODEL: &'static RecordModel = &PROBE_MODEL;
}

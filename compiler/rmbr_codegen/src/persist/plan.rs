use rmbr_ir::ClassModel;

/// One entry of the save map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveEntry {
    pub key: String,
    /// Property read off the instance.
    pub property: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreSource {
    /// Read from the save map under `key`.
    Map { key: String },
    /// Forwarded from the saver's own parameter of the same name.
    Forward,
}

/// One constructor argument of `restore`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestoreArg {
    pub param: String,
    pub source: RestoreSource,
}

/// What a saver stores and how it rebuilds the instance.
///
/// `restore` is index-aligned with the class parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaverPlan {
    pub save: Vec<SaveEntry>,
    pub restore: Vec<RestoreArg>,
}

impl SaverPlan {
    pub fn new(model: &ClassModel) -> Self {
        let save = model
            .saveable_properties
            .iter()
            .map(|prop| SaveEntry {
                key: prop.saveable_key.clone(),
                property: prop.name.clone(),
            })
            .collect();
        let restore = model
            .params
            .iter()
            .map(|param| RestoreArg {
                param: param.name.clone(),
                source: match &param.saveable_key {
                    Some(key) => RestoreSource::Map { key: key.clone() },
                    None => RestoreSource::Forward,
                },
            })
            .collect();
        SaverPlan { save, restore }
    }

    /// Saver parameters, in declaration order.
    pub fn carried(&self) -> impl Iterator<Item = &str> {
        self.restore
            .iter()
            .filter(|arg| arg.source == RestoreSource::Forward)
            .map(|arg| arg.param.as_str())
    }

    pub fn reads_map(&self) -> bool {
        self.restore
            .iter()
            .any(|arg| matches!(arg.source, RestoreSource::Map { .. }))
    }
}

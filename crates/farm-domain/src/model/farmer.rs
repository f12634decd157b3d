//! Farmer - The owner of crops
//!
//! Farmer is an Entity: the same FarmerId always refers to the same person,
//! whatever happens to their name.

/// Unique identifier for a Farmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FarmerId(i64);

impl FarmerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for FarmerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Farmer - Parent entity of crops
///
/// `id` stays `None` until a repository has persisted the farmer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Farmer {
    id: Option<FarmerId>,
    first_name: String,
    middle_name: String,
    last_name: String,
}

impl Farmer {
    /// Create a new, not yet persisted Farmer
    ///
    /// First and last name must contain something other than whitespace.
    /// The middle name may be empty.
    pub fn new(
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, FarmerError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.trim().is_empty() {
            return Err(FarmerError::BlankName { field: "first_name" });
        }
        if last_name.trim().is_empty() {
            return Err(FarmerError::BlankName { field: "last_name" });
        }

        Ok(Self {
            id: None,
            first_name,
            middle_name: middle_name.into(),
            last_name,
        })
    }

    /// Builder: attach an identity (used by repositories)
    pub fn with_id(mut self, id: FarmerId) -> Self {
        self.id = Some(id);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> Option<FarmerId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Non-empty name parts joined by single spaces
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Errors raised while building a Farmer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FarmerError {
    BlankName { field: &'static str },
}

impl core::fmt::Display for FarmerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FarmerError::BlankName { field } => write!(f, "Farmer {} must not be blank", field),
        }
    }
}

impl std::error::Error for FarmerError {}

//! Icon configuration for dead and scheduled products.

pub const TOMBSTONE_URL: &str = "https://static.killedbygoogle.com/com/tombstone.svg";
pub const GUILLOTINE_URL: &str = "https://static.killedbygoogle.com/com/guillotine.svg";

/// Image URLs used by list items. Provide one through context to point at a
/// different asset host; [`IconSet::default`] uses the public static host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub past_url: String,
    pub active_url: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            past_url: TOMBSTONE_URL.to_string(),
            active_url: GUILLOTINE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Tombstone,
    Guillotine,
}

impl Icon {
    pub fn for_status(is_past: bool) -> Self {
        if is_past {
            Self::Tombstone
        } else {
            Self::Guillotine
        }
    }

    pub fn url<'a>(&self, set: &'a IconSet) -> &'a str {
        match self {
            Self::Tombstone => &set.past_url,
            Self::Guillotine => &set.active_url,
        }
    }
}

//! Hypermedia link assembly and HAL envelopes.
//!
//! # Invariants
//! - Assets without an id get no links.
//! - Collections always carry `_embedded.<rel>` and a `self` link, also
//!   when the item list is empty.
//! - Link relations serialize in insertion order, `self` first.

use axum::http::header::HOST;
use axum::http::HeaderMap;
use devteams_core::{ProgrammerAsset, ProgrammerId, TeamAsset, TeamId};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const TEAM_COLLECTION_REL: &str = "teamAssetList";
pub const PROGRAMMER_COLLECTION_REL: &str = "programmerAssetList";

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FALLBACK_BASE: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

/// Ordered relation → link map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<(&'static str, Link)>);

impl Links {
    pub fn push(&mut self, rel: &'static str, href: String) {
        self.0.push((rel, Link { href }));
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == rel)
            .map(|(_, link)| link)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, link) in &self.0 {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

/// One asset with its `_links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalResource<T> {
    #[serde(flatten)]
    pub asset: T,
    #[serde(rename = "_links", skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

/// A list of resources embedded under `rel`, plus collection links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalCollection<T> {
    pub rel: &'static str,
    pub items: Vec<HalResource<T>>,
    pub links: Links,
}

impl<T: Serialize> Serialize for HalCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Embedded<'a, T>(&'static str, &'a [HalResource<T>]);

        impl<T: Serialize> Serialize for Embedded<'_, T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.0, self.1)?;
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("_embedded", &Embedded(self.rel, &self.items))?;
        map.serialize_entry("_links", &self.links)?;
        map.end()
    }
}

/// Builds absolute links against one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Uses `public_url` when configured, else the request's `Host` header.
    pub fn for_request(public_url: Option<&str>, headers: &HeaderMap) -> Self {
        if let Some(url) = public_url {
            return Self::new(url);
        }

        let host = headers.get(HOST).and_then(|value| value.to_str().ok());
        match host {
            Some(host) => {
                let scheme = headers
                    .get(FORWARDED_PROTO)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("http");
                Self::new(format!("{scheme}://{host}"))
            }
            None => Self::new(FALLBACK_BASE),
        }
    }

    pub fn team_url(&self, team_id: TeamId) -> String {
        format!("{}/team/{team_id}", self.base)
    }

    pub fn teams_url(&self) -> String {
        format!("{}/team", self.base)
    }

    pub fn programmer_url(&self, programmer_id: ProgrammerId) -> String {
        format!("{}/programmer/{programmer_id}", self.base)
    }

    pub fn programmers_url(&self, team_filter: Option<TeamId>) -> String {
        match team_filter {
            Some(team_id) => format!("{}/programmer?teamId={team_id}", self.base),
            None => format!("{}/programmer", self.base),
        }
    }

    /// Adds `self` and `programmers` to a saved team.
    pub fn team(&self, asset: TeamAsset) -> HalResource<TeamAsset> {
        let mut links = Links::default();
        if let Some(team_id) = asset.team_id {
            links.push("self", self.team_url(team_id));
            links.push("programmers", self.programmers_url(Some(team_id)));
        }
        HalResource { asset, links }
    }

    /// Adds `self` to a saved programmer and `team` when it has an owner.
    pub fn programmer(&self, asset: ProgrammerAsset) -> HalResource<ProgrammerAsset> {
        let mut links = Links::default();
        if let Some(programmer_id) = asset.programmer_id {
            links.push("self", self.programmer_url(programmer_id));
        }
        if let Some(team_id) = asset.team_id {
            links.push("team", self.team_url(team_id));
        }
        HalResource { asset, links }
    }

    pub fn team_collection(&self, assets: Vec<TeamAsset>) -> HalCollection<TeamAsset> {
        let mut links = Links::default();
        links.push("self", self.teams_url());
        HalCollection {
            rel: TEAM_COLLECTION_REL,
            items: assets.into_iter().map(|asset| self.team(asset)).collect(),
            links,
        }
    }

    /// `team_filter` is echoed into the collection's `self` link.
    pub fn programmer_collection(
        &self,
        assets: Vec<ProgrammerAsset>,
        team_filter: Option<TeamId>,
    ) -> HalCollection<ProgrammerAsset> {
        let mut links = Links::default();
        links.push("self", self.programmers_url(team_filter));
        HalCollection {
            rel: PROGRAMMER_COLLECTION_REL,
            items: assets
                .into_iter()
                .map(|asset| self.programmer(asset))
                .collect(),
            links,
        }
    }
}

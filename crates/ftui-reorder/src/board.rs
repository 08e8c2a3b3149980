#![forbid(unsafe_code)]

//! Normalized board model.
//!
//! A [`BoardState`] separates ordering from entities: columns hold ordered card
//! id lists, and card entities live in a single id-keyed map. Snapshots are
//! shared as `Arc<BoardState>` and never mutated; a transition builds a new
//! snapshot that reuses every untouched column `Arc` and the card map `Arc`, so
//! upstream change detection can compare with [`Arc::ptr_eq`].
//!
//! # Invariants (maintained by callers, checked by [`crate::validate`])
//!
//! 1. Column ids are unique.
//! 2. A card id appears at most once across all columns combined.
//! 3. Every card id referenced by a column has an entry in `cards`.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier for a card, unique across the whole board.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(String);

/// Stable identifier for a column, unique among columns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColumnId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Create an id from any string-like value.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Borrow the raw id.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(CardId);
string_id!(ColumnId);

/// A card entity. `data` carries application fields the engine never reads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "D: Deserialize<'de> + Default"))
)]
pub struct Card<D = ()> {
    pub id: CardId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: D,
}

impl Card<()> {
    /// Create a card without a payload.
    #[must_use]
    pub fn new(id: impl Into<CardId>, title: impl Into<String>) -> Self {
        Self::with_data(id, title, ())
    }
}

impl<D> Card<D> {
    #[must_use]
    pub fn with_data(id: impl Into<CardId>, title: impl Into<String>, data: D) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            data,
        }
    }
}

/// A column: an ordered list of card ids plus application data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "D: Deserialize<'de> + Default"))
)]
pub struct Column<D = ()> {
    pub id: ColumnId,
    pub title: String,
    pub card_ids: Vec<CardId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: D,
}

impl Column<()> {
    /// Create a column without a payload.
    #[must_use]
    pub fn new<I, C>(id: impl Into<ColumnId>, title: impl Into<String>, card_ids: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CardId>,
    {
        Self::with_data(id, title, card_ids, ())
    }
}

impl<D> Column<D> {
    #[must_use]
    pub fn with_data<I, C>(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        card_ids: I,
        data: D,
    ) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CardId>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            card_ids: card_ids.into_iter().map(Into::into).collect(),
            data,
        }
    }

    /// Index of `card` within this column.
    #[must_use]
    pub fn position_of(&self, card: &str) -> Option<usize> {
        self.card_ids.iter().position(|id| id == card)
    }

    /// Copy of this column with a different card order.
    #[must_use]
    pub(crate) fn with_card_ids(&self, card_ids: Vec<CardId>) -> Self
    where
        D: Clone,
    {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            card_ids,
            data: self.data.clone(),
        }
    }
}

/// Id-keyed card lookup.
pub type CardMap<D = ()> = FxHashMap<CardId, Card<D>>;

/// Immutable board snapshot.
///
/// `C` is the card payload, `K` the column payload.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "C: Serialize, K: Serialize",
        deserialize = "C: Deserialize<'de> + Default, K: Deserialize<'de> + Default"
    ))
)]
pub struct BoardState<C = (), K = ()> {
    pub columns: Vec<Arc<Column<K>>>,
    pub cards: Arc<CardMap<C>>,
}

impl<C, K> Clone for BoardState<C, K> {
    // Shallow: clones `Arc`s, never entities.
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            cards: Arc::clone(&self.cards),
        }
    }
}

impl<C, K> Default for BoardState<C, K> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            cards: Arc::default(),
        }
    }
}

impl<C, K> BoardState<C, K> {
    /// Build a snapshot from owned columns and cards.
    #[must_use]
    pub fn new(
        columns: impl IntoIterator<Item = Column<K>>,
        cards: impl IntoIterator<Item = Card<C>>,
    ) -> Self {
        let cards = cards
            .into_iter()
            .map(|card| (card.id.clone(), card))
            .collect();
        Self {
            columns: columns.into_iter().map(Arc::new).collect(),
            cards: Arc::new(cards),
        }
    }

    /// Wrap the snapshot for sharing with the reducer.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Column lookup by id.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&Arc<Column<K>>> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Index of a column in display order.
    #[must_use]
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    /// Card lookup by id.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&Card<C>> {
        self.cards.get(id)
    }

    /// Column currently holding `card`, with the card's index in it.
    #[must_use]
    pub fn locate_card(&self, card: &str) -> Option<(&Arc<Column<K>>, usize)> {
        self.columns
            .iter()
            .find_map(|column| column.position_of(card).map(|index| (column, index)))
    }

    /// Total number of card slots across all columns.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.card_ids.len())
            .sum()
    }

    /// Card ids in column order, then card order.
    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> + '_ {
        self.columns
            .iter()
            .flat_map(|column| column.card_ids.iter())
    }

    /// Column ids in display order.
    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> + '_ {
        self.columns.iter().map(|column| &column.id)
    }
}

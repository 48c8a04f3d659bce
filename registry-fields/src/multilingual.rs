//! Multilingual field: one value per declared language.
//!
//! A [`Multilingual`] always holds a value for every language in
//! [`Language::ALL`]. On the wire it is a JSON object keyed by language code;
//! missing or `null` entries deserialize to the value type's default, so the
//! invariant holds for any input that is an object at all.

use std::fmt;
use std::marker::PhantomData;

use registry_views::{Binding, LanguagePane, ViewNode};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Multilingual<T> {
    values: [T; Language::COUNT],
}

impl<T> Multilingual<T> {
    /// Build a value by asking for each language in declaration order.
    pub fn from_fn(mut f: impl FnMut(Language) -> T) -> Self {
        Self {
            values: Language::ALL.map(&mut f),
        }
    }

    pub fn get(&self, lang: Language) -> &T {
        &self.values[lang.index()]
    }

    /// The primary-language value.
    pub fn primary(&self) -> &T {
        self.get(Language::PRIMARY)
    }

    /// Values paired with their language, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }

    /// Lay the value out as side-by-side panes.
    ///
    /// `pane` renders one language's value. When `binding` is set each pane
    /// receives it narrowed to that pane's language; otherwise panes render
    /// read-only.
    pub fn render(
        &self,
        binding: Option<&Binding>,
        mut pane: impl FnMut(&T, Option<Binding>) -> ViewNode,
    ) -> ViewNode {
        let panes = self
            .iter()
            .map(|(lang, value)| LanguagePane {
                code: lang.code().to_string(),
                content: pane(value, binding.map(|b| b.clone().in_language(lang.code()))),
            })
            .collect();
        ViewNode::LanguagePanes { panes }
    }
}

impl<T: Clone> Multilingual<T> {
    /// A copy with one language's value replaced.
    pub fn with(&self, lang: Language, value: T) -> Self {
        let mut next = self.clone();
        next.values[lang.index()] = value;
        next
    }

    /// Fold one pane's edit into a new whole-field value.
    ///
    /// `edit` sees only the edited language's current value. Every other
    /// language is carried over unchanged.
    pub fn edit<E>(&self, lang: Language, edit: impl FnOnce(&T) -> Result<T, E>) -> Result<Self, E> {
        let value = edit(self.get(lang))?;
        Ok(self.with(lang, value))
    }
}

impl<T: Serialize> Serialize for Multilingual<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Language::COUNT))?;
        for (lang, value) in self.iter() {
            map.serialize_entry(lang.code(), value)?;
        }
        map.end()
    }
}

impl<'de, T> Deserialize<'de> for Multilingual<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MultilingualVisitor(PhantomData))
    }
}

struct MultilingualVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for MultilingualVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = Multilingual<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object keyed by language code")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut slots: [Option<T>; Language::COUNT] = Default::default();
        while let Some(key) = access.next_key::<String>()? {
            match Language::from_code(&key) {
                Ok(lang) => slots[lang.index()] = access.next_value::<Option<T>>()?,
                Err(_) => {
                    debug!(code = %key, "ignoring undeclared language");
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        let mut slots = slots.into_iter();
        Ok(Multilingual::from_fn(|_| {
            slots.next().flatten().unwrap_or_default()
        }))
    }
}

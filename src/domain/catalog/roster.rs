//! Catalog Context - 作者性别名单

use std::collections::BTreeSet;

use super::Gender;

/// 某一性别分类下的作者名单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderRoster {
    names: BTreeSet<String>,
}

impl GenderRoster {
    /// 空名字会被丢弃（空串是任何作者串的子串）
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 名单中是否有该作者（精确匹配）
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// 作者展示串中是否包含名单中任一名字（子串匹配）
    ///
    /// 注意：名字互相包含时会误判，例如名单中的 "Ann" 会匹配 "Joanne Harris"。
    pub fn matches_authors(&self, authors: &str) -> bool {
        self.names.iter().any(|name| authors.contains(name.as_str()))
    }
}

/// 男/女两份名单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderRosters {
    male: GenderRoster,
    female: GenderRoster,
}

impl GenderRosters {
    pub fn new(male: GenderRoster, female: GenderRoster) -> Self {
        Self { male, female }
    }

    pub fn get(&self, gender: Gender) -> &GenderRoster {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    pub fn set(&mut self, gender: Gender, roster: GenderRoster) {
        match gender {
            Gender::Male => self.male = roster,
            Gender::Female => self.female = roster,
        }
    }
}

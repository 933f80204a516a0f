use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clave del cubo implícito al que pertenecen las obras sin categoría.
///
/// No forma parte de [`CategoryFilter`]: esas obras solo aparecen con
/// [`CategoryFilter::All`].
pub const UNCATEGORIZED_KEY: &str = "autre";

/// Categoría editorial de una obra.
///
/// Los nombres de cable (`peinture`, `sculpture`, ...) son los que usa el
/// almacén remoto y el estado persistido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Peinture,
  Sculpture,
  Style,
  Objet,
}

impl Category {
  pub const ALL: [Category; 4] = [Category::Peinture, Category::Sculpture, Category::Style, Category::Objet];

  /// Nombre de cable de la categoría.
  pub fn key(&self) -> &'static str {
    match self {
      Category::Peinture => "peinture",
      Category::Sculpture => "sculpture",
      Category::Style => "style",
      Category::Objet => "objet",
    }
  }

  /// Etiqueta visible en la interfaz.
  pub fn label(&self) -> &'static str {
    match self {
      Category::Peinture => "Peinture",
      Category::Sculpture => "Sculpture",
      Category::Style => "Style artistique",
      Category::Objet => "Objet",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

/// Error producido cuando una cadena no corresponde a ninguna categoría.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid category: {input}")]
pub struct CategoryParseError {
  pub input: String,
}

impl FromStr for Category {
  type Err = CategoryParseError;

  /// Acepta el nombre de cable, sin distinguir mayúsculas ni espacios
  /// alrededor.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let category = match s.trim().to_lowercase().as_str() {
      "peinture" => Category::Peinture,
      "sculpture" => Category::Sculpture,
      "style" => Category::Style,
      "objet" => Category::Objet,
      _ => return Err(CategoryParseError { input: s.to_string() }),
    };

    Ok(category)
  }
}

/// Selector de categoría del catálogo: `all` o una categoría concreta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
  #[default]
  All,
  Only(Category),
}

impl CategoryFilter {
  /// Filtros en el orden en que se presentan al visitante.
  pub fn options() -> [CategoryFilter; 5] {
    [
      CategoryFilter::All,
      CategoryFilter::Only(Category::Peinture),
      CategoryFilter::Only(Category::Sculpture),
      CategoryFilter::Only(Category::Style),
      CategoryFilter::Only(Category::Objet),
    ]
  }

  /// Predicado de categoría: `all` deja pasar todo; si no, la categoría de
  /// la obra (o el cubo `autre`) debe coincidir.
  pub fn matches(&self, category: Option<Category>) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Only(wanted) => category.map_or(UNCATEGORIZED_KEY, |c| c.key()) == wanted.key(),
    }
  }

  pub fn key(&self) -> &'static str {
    match self {
      CategoryFilter::All => "all",
      CategoryFilter::Only(c) => c.key(),
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      CategoryFilter::All => "Tout",
      CategoryFilter::Only(c) => c.label(),
    }
  }
}

impl fmt::Display for CategoryFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

impl FromStr for CategoryFilter {
  type Err = CategoryParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.trim().eq_ignore_ascii_case("all") {
      return Ok(CategoryFilter::All);
    }
    s.parse::<Category>().map(CategoryFilter::Only)
  }
}

impl TryFrom<String> for CategoryFilter {
  type Error = CategoryParseError;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

impl From<CategoryFilter> for String {
  fn from(filter: CategoryFilter) -> Self {
    filter.key().to_string()
  }
}

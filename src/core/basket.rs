//! The CPI consumption basket.
//!
//! The hierarchy is fixed: twelve categories, some of which expand into
//! items. Declaration order drives the input layout and the chart legend.
use serde::Serialize;
use std::fmt;

/// Identity of a basket leaf, i.e. the smallest unit that accepts an entry.
///
/// Only obtainable from a [`Basket`], so holding one proves the name exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LeafId(&'static str);

impl LeafId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LeafId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A basket category: either an entry point of its own or a container of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryNode {
    Leaf {
        name: &'static str,
        annotated: bool,
    },
    Container {
        name: &'static str,
        annotated: bool,
        children: &'static [&'static str],
    },
}

impl CategoryNode {
    pub fn name(&self) -> &'static str {
        match self {
            CategoryNode::Leaf { name, .. } | CategoryNode::Container { name, .. } => name,
        }
    }

    /// Whether the category carries a supplementary-info marker.
    pub fn annotated(&self) -> bool {
        match self {
            CategoryNode::Leaf { annotated, .. } | CategoryNode::Container { annotated, .. } => {
                *annotated
            }
        }
    }

    /// Leaf identities under this node, in declaration order.
    pub fn leaves(&self) -> impl Iterator<Item = LeafId> + '_ {
        let names: &[&'static str] = match self {
            CategoryNode::Leaf { name, .. } => std::slice::from_ref(name),
            CategoryNode::Container { children, .. } => children,
        };
        names.iter().map(|n| LeafId(*n))
    }

    /// Returns the display marker for annotated categories
    pub fn marker(&self) -> &'static str {
        if self.annotated() { "ℹ️" } else { "" }
    }
}

#[derive(Debug, PartialEq)]
pub struct Basket {
    categories: &'static [CategoryNode],
}

/// The national CPI basket.
pub static CPI_BASKET: Basket = Basket {
    categories: &[
        CategoryNode::Container {
            name: "Alimentos y bebidas no alcohólicas",
            annotated: true,
            children: &[
                "Carnes y derivados",
                "Frutas",
                "Verduras, tubérculos y legumbres",
                "Resto de alimentos y bebidas n/a",
            ],
        },
        CategoryNode::Leaf {
            name: "Bebidas alcohólicas y tabaco",
            annotated: false,
        },
        CategoryNode::Leaf {
            name: "Prendas de vestir y calzado",
            annotated: false,
        },
        CategoryNode::Container {
            name: "Vivienda, agua, electricidad, gas y otros combustibles",
            annotated: true,
            children: &[
                "Alquiler de la vivienda y gastos conexos",
                "Electricidad, gas y otros combustibles",
            ],
        },
        CategoryNode::Leaf {
            name: "Equipamiento y mantenimiento del hogar",
            annotated: true,
        },
        CategoryNode::Container {
            name: "Salud",
            annotated: true,
            children: &[
                "Productos medicinales, artefactos y equipos para la salud",
                "Gastos de prepagas",
            ],
        },
        CategoryNode::Container {
            name: "Transporte",
            annotated: true,
            children: &[
                "Combustibles y lubricantes para vehículos de uso del hogar",
                "Transporte público",
            ],
        },
        CategoryNode::Leaf {
            name: "Servicios de telefonía e internet",
            annotated: true,
        },
        CategoryNode::Leaf {
            name: "Recreación y cultura",
            annotated: true,
        },
        CategoryNode::Leaf {
            name: "Educación",
            annotated: true,
        },
        CategoryNode::Leaf {
            name: "Restaurantes y comidas fuera del hogar",
            annotated: true,
        },
        CategoryNode::Leaf {
            name: "Cuidado personal",
            annotated: true,
        },
    ],
};

impl Basket {
    pub fn standard() -> &'static Basket {
        &CPI_BASKET
    }

    pub fn categories(&self) -> &'static [CategoryNode] {
        self.categories
    }

    /// All leaves in traversal order: categories as declared, then their
    /// children as declared.
    pub fn leaves(&self) -> impl Iterator<Item = LeafId> + 'static {
        self.categories.iter().flat_map(|c| c.leaves())
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Looks up a leaf by its display name. Container names are not leaves.
    pub fn leaf(&self, name: &str) -> Option<LeafId> {
        self.leaves().find(|l| l.as_str() == name)
    }

    /// The category a leaf belongs to.
    pub fn category_of(&self, leaf: LeafId) -> Option<&'static CategoryNode> {
        self.categories
            .iter()
            .find(|c| c.leaves().any(|l| l == leaf))
    }
}

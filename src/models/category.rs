use rust_decimal::Decimal;

/// A fixed spending bucket with a monthly limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: &'static str,
    pub monthly_limit: Decimal,
    pub icon: &'static str,
    /// Hex RGB, e.g. `#4CAF50`.
    pub color: &'static str,
}

const fn limit(whole: u32) -> Decimal {
    Decimal::from_parts(whole, 0, 0, false, 0)
}

static CATEGORIES: [Category; 8] = [
    Category {
        id: 1,
        name: "Food",
        monthly_limit: limit(800),
        icon: "shopping_cart",
        color: "#4CAF50",
    },
    Category {
        id: 2,
        name: "Transport",
        monthly_limit: limit(300),
        icon: "directions_car",
        color: "#2196F3",
    },
    Category {
        id: 3,
        name: "Entertainment",
        monthly_limit: limit(200),
        icon: "movie",
        color: "#9C27B0",
    },
    Category {
        id: 4,
        name: "Housing",
        monthly_limit: limit(1500),
        icon: "home",
        color: "#FF9800",
    },
    Category {
        id: 5,
        name: "Health",
        monthly_limit: limit(400),
        icon: "medical",
        color: "#F44336",
    },
    Category {
        id: 6,
        name: "Coffee/Drinks",
        monthly_limit: limit(150),
        icon: "restaurant",
        color: "#795548",
    },
    Category {
        id: 7,
        name: "Shopping",
        monthly_limit: limit(500),
        icon: "local_mall",
        color: "#E91E63",
    },
    Category {
        id: 8,
        name: "Other",
        monthly_limit: limit(300),
        icon: "category",
        color: "#607D8B",
    },
];

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    pub fn by_id(id: i64) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    /// Find a category by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Category> {
        let lower = name.trim().to_lowercase();
        CATEGORIES.iter().find(|c| c.name.to_lowercase() == lower)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

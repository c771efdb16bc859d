#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

/// Name as used in output file names, "Howto & Style" becomes "Howto_and_Style".
pub fn category_slug(name: &str) -> String {
    name.replace(' ', "_").replace('&', "and")
}

/// Categories the mostPopular chart can be filtered by.
pub const CATEGORIES: [Category; 13] = [
    Category { id: "1", name: "Film & Animation" },
    Category { id: "2", name: "Autos & Vehicles" },
    Category { id: "10", name: "Music" },
    Category { id: "15", name: "Pets & Animals" },
    Category { id: "17", name: "Sports" },
    Category { id: "20", name: "Gaming" },
    Category { id: "22", name: "People & Blogs" },
    Category { id: "23", name: "Comedy" },
    Category { id: "24", name: "Entertainment" },
    Category { id: "25", name: "News & Politics" },
    Category { id: "26", name: "Howto & Style" },
    Category { id: "27", name: "Education" },
    Category { id: "28", name: "Science & Technology" },
];

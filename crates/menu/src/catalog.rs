use canteen_shared::MealType;

pub(crate) struct Dish {
    pub title: &'static str,
    pub description: &'static str,
    pub calories: u16,
    pub vegetarian: bool,
    pub tags: &'static [&'static str],
}

const BREAKFAST: &[Dish] = &[
    Dish {
        title: "Masala Poha",
        description: "Flattened rice tempered with mustard seeds, curry leaves and peanuts",
        calories: 320,
        vegetarian: true,
        tags: &["vegan", "light"],
    },
    Dish {
        title: "Idli Sambar",
        description: "Steamed rice cakes with lentil sambar and coconut chutney",
        calories: 280,
        vegetarian: true,
        tags: &["vegan", "south-indian"],
    },
    Dish {
        title: "Aloo Paratha",
        description: "Whole wheat flatbread stuffed with spiced potato, served with curd",
        calories: 450,
        vegetarian: true,
        tags: &["north-indian", "hearty"],
    },
    Dish {
        title: "Egg Bhurji Toast",
        description: "Spiced scrambled eggs on toasted multigrain bread",
        calories: 380,
        vegetarian: false,
        tags: &["high-protein"],
    },
    Dish {
        title: "Moong Dal Chilla",
        description: "Savory lentil crepes with mint chutney",
        calories: 260,
        vegetarian: true,
        tags: &["vegan", "jain", "high-protein"],
    },
    Dish {
        title: "Vegetable Upma",
        description: "Semolina cooked with seasonal vegetables and ginger",
        calories: 300,
        vegetarian: true,
        tags: &["vegan", "light"],
    },
];

const LUNCH: &[Dish] = &[
    Dish {
        title: "Rajma Chawal",
        description: "Slow-cooked kidney bean curry with steamed basmati rice",
        calories: 620,
        vegetarian: true,
        tags: &["vegan", "north-indian"],
    },
    Dish {
        title: "Chicken Biryani",
        description: "Layered basmati rice with marinated chicken and raita",
        calories: 780,
        vegetarian: false,
        tags: &["chef-special"],
    },
    Dish {
        title: "Fish Curry Rice",
        description: "Coastal-style fish curry with red rice",
        calories: 650,
        vegetarian: false,
        tags: &["coastal", "high-protein"],
    },
    Dish {
        title: "Jain Veg Pulao",
        description: "Fragrant rice with raw banana and capsicum, no root vegetables",
        calories: 540,
        vegetarian: true,
        tags: &["jain"],
    },
    Dish {
        title: "Paneer Butter Masala Thali",
        description: "Cottage cheese in tomato gravy with roti, dal and salad",
        calories: 720,
        vegetarian: true,
        tags: &["north-indian", "thali"],
    },
    Dish {
        title: "Dal Tadka Bowl",
        description: "Yellow lentils tempered with cumin, served with jeera rice",
        calories: 560,
        vegetarian: true,
        tags: &["vegan", "comfort"],
    },
];

const SNACK: &[Dish] = &[
    Dish {
        title: "Sprouts Salad",
        description: "Mixed sprouts with lemon, tomato and coriander",
        calories: 180,
        vegetarian: true,
        tags: &["vegan", "jain", "light"],
    },
    Dish {
        title: "Samosa Chaat",
        description: "Crushed samosa with chickpeas, yogurt and tamarind chutney",
        calories: 420,
        vegetarian: true,
        tags: &["street-food"],
    },
    Dish {
        title: "Khaman Dhokla",
        description: "Steamed gram flour cakes with green chutney",
        calories: 220,
        vegetarian: true,
        tags: &["jain", "gujarati"],
    },
    Dish {
        title: "Chicken Tikka Bites",
        description: "Tandoor-roasted chicken pieces with mint dip",
        calories: 340,
        vegetarian: false,
        tags: &["high-protein"],
    },
    Dish {
        title: "Seasonal Fruit Bowl",
        description: "Cut seasonal fruit with a sprinkle of chaat masala",
        calories: 150,
        vegetarian: true,
        tags: &["vegan", "jain", "light"],
    },
    Dish {
        title: "Masala Chai and Khakhra",
        description: "Spiced tea with roasted whole wheat crisps",
        calories: 200,
        vegetarian: true,
        tags: &["jain"],
    },
];

pub(crate) fn dishes(meal_type: MealType) -> &'static [Dish] {
    match meal_type {
        MealType::Breakfast => BREAKFAST,
        MealType::Lunch => LUNCH,
        MealType::Snack => SNACK,
    }
}

//! Grocery category keyword table.
//!
//! Categories are listed in evaluation order and keywords within a category
//! run from most specific phrase to most generic word. The categorizer relies
//! on that ordering: "garlic powder" under Spices & Seasonings must be seen
//! before "garlic" under Produce.

/// Ordered `(category, keywords)` pairs
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Spices & Seasonings",
        &[
            "italian seasoning", "italian herbs", "taco seasoning", "taco spice",
            "fajita seasoning", "curry powder", "curry spice", "madras curry", "garam masala",
            "tikka masala", "chinese five spice", "five spice", "cajun seasoning",
            "creole seasoning", "ranch seasoning", "ranch mix", "poultry seasoning",
            "chicken seasoning", "pumpkin pie spice", "pumpkin spice", "herbes de provence",
            "za'atar", "dukkah", "everything bagel seasoning", "old bay seasoning", "old bay",
            "adobo seasoning", "garlic powder", "onion powder", "chili powder",
            "cayenne pepper", "cumin powder", "ground ginger", "ginger powder",
            "ground cloves", "ground cardamom", "ground mustard", "smoked paprika",
            "sweet paprika", "chipotle powder", "kosher salt", "garlic salt", "onion salt",
            "seasoned salt", "celery salt", "salt", "black pepper", "white pepper", "cayenne",
            "red pepper flakes", "pepper flakes", "green peppercorns", "peppercorns", "pepper",
            "cinnamon", "paprika", "cumin", "turmeric", "nutmeg", "allspice", "cardamom",
            "cardamom pods", "star anise", "anise seed", "whole cloves", "mustard seed",
            "mustard powder", "celery seed", "fennel seed", "caraway seed", "coriander seeds",
            "fenugreek", "saffron", "sumac", "msg", "bay leaves", "bay leaf", "dried oregano",
            "dried basil", "dried thyme", "dried marjoram", "dried tarragon", "dried dill",
            "dill weed", "dried parsley", "dried cilantro", "dried rosemary", "dried sage",
            "dried mint", "herbes",
        ],
    ),
    (
        "Produce",
        &[
            "white onion", "red onion", "shallots", "shallot", "green onions", "scallions",
            "leeks", "onion", "onions", "garlic", "bell pepper", "bell peppers",
            "red bell pepper", "green bell pepper", "yellow bell pepper", "capsicum",
            "fresh jalapeño", "fresh jalapenos", "jalapeño peppers", "serrano pepper",
            "serrano peppers", "serranos", "habanero", "habanero pepper", "poblano",
            "poblano pepper", "anaheim pepper", "pasilla", "arbol", "chiles", "peppers",
            "roma tomato", "cherry tomatoes", "grape tomatoes", "tomatillos", "tomato",
            "tomatoes", "spinach", "kale", "arugula", "lettuce", "mixed greens", "spring mix",
            "salad mix", "cabbage", "napa cabbage", "chinese cabbage", "bok choy",
            "baby bok choy", "brussels sprouts", "brussel sprouts", "carrot", "carrots",
            "baby carrots", "potato", "potatoes", "sweet potato", "beets", "beet", "beetroot",
            "turnip", "turnips", "parsnip", "parsnips", "radish", "radishes", "ginger root",
            "ginger", "fresh ginger", "horseradish root", "fresh horseradish",
            "fresh turmeric", "turmeric root", "jicama", "butternut squash", "acorn squash",
            "spaghetti squash", "zucchini", "eggplant", "pumpkin", "squash", "broccoli",
            "cauliflower", "celery", "cucumber", "mushroom", "mushrooms", "asparagus",
            "artichoke", "artichokes", "artichoke hearts", "fennel", "fennel bulb",
            "corn kernels", "corn cob", "fresh corn", "peas", "snap peas", "sugar snap peas",
            "snow peas", "green beans", "beans", "edamame", "bean sprouts", "sprouts",
            "alfalfa sprouts", "mung bean sprouts", "water chestnuts", "lemongrass",
            "lemongrass stalks", "coleslaw mix", "slaw mix", "sun dried tomatoes",
            "packaged herbs", "strawberry", "strawberries", "blueberry", "blueberries",
            "raspberry", "raspberries", "blackberry", "blackberries", "lemon", "lemons",
            "lime", "limes", "orange", "oranges", "grapefruit", "apple", "apples", "pear",
            "pears", "peach", "peaches", "nectarine", "nectarines", "plum", "plums", "apricot",
            "apricots", "cherry", "cherries", "banana", "bananas", "pineapple", "mango",
            "papaya", "kiwi", "avocado", "avocados", "coconut", "fresh coconut", "plantain",
            "plantains", "dragon fruit", "pitaya", "star fruit", "guava", "passion fruit",
            "watermelon", "cantaloupe", "honeydew", "honeydew melon", "melon", "grape",
            "grapes", "pomegranate", "pomegranate seeds", "fig", "figs", "dates", "date",
            "persimmon", "raisins", "fresh thyme", "fresh basil", "fresh herbs", "basil",
            "cilantro", "parsley", "thyme", "rosemary", "sage", "mint", "oregano", "dill",
            "chives", "sprigs dill", "sprigs",
        ],
    ),
    (
        "Meat & Seafood",
        &[
            "ground beef", "ground chuck", "lean ground beef", "chuck roast", "ribeye",
            "sirloin", "flank steak", "skirt steak", "t-bone", "porterhouse", "filet mignon",
            "beef tenderloin", "beef brisket", "brisket", "short ribs", "beef short ribs",
            "beef ribs", "pot roast", "roast beef", "stew meat", "beef stew meat", "oxtail",
            "beef", "steak", "chicken breast", "chicken thighs", "chicken wings", "wings",
            "chicken drumsticks", "drumsticks", "chicken legs", "whole chicken",
            "roasting chicken", "rotisserie chicken", "ground turkey", "ground chicken",
            "turkey breast", "turkey tenderloin", "cornish hen", "game hen", "chicken",
            "turkey", "duck", "ground pork", "pork chops", "pork tenderloin", "pork belly",
            "pork ribs", "baby back ribs", "spare ribs", "pork shoulder", "pork butt",
            "pork loin", "pork roast", "italian sausage", "breakfast sausage", "bratwurst",
            "kielbasa", "sausage", "bacon", "pancetta", "prosciutto", "ham", "salami",
            "pepperoni", "chorizo", "hot dogs", "frankfurters", "pork", "salmon", "tuna",
            "cod", "tilapia", "trout", "halibut", "mahi mahi", "mahi-mahi", "swordfish",
            "sea bass", "chilean sea bass", "catfish", "flounder", "sole", "snapper",
            "red snapper", "grouper", "fresh sardines", "sardines", "fresh anchovies",
            "anchovies", "fish", "shrimp", "prawns", "crab", "lobster", "scallops", "mussels",
            "clams", "oysters", "fresh oysters", "squid", "calamari", "octopus", "crawfish",
            "crayfish", "lamb chops", "lamb shanks", "lamb shoulder", "lamb leg",
            "ground lamb", "lamb",
        ],
    ),
    (
        "Dairy",
        &[
            "whole milk", "skim milk", "2% milk", "1% milk", "buttermilk", "evaporated milk",
            "condensed milk", "sweetened condensed milk", "milk", "heavy cream",
            "heavy whipping cream", "whipping cream", "sour cream", "half and half",
            "half-and-half", "whipped cream", "cream cheese", "cream cheese spread", "cream",
            "greek yogurt", "plain yogurt", "flavored yogurt", "yogurt", "kefir",
            "monterey jack", "pepper jack", "jack cheese", "american cheese", "mexican cheese",
            "cheese blend", "cheddar cheese", "shredded cheese", "mozzarella", "cheddar",
            "parmesan", "grated parmesan", "ricotta", "feta", "goat cheese", "cottage cheese",
            "swiss cheese", "swiss", "provolone", "provolone cheese", "blue cheese",
            "bleu cheese", "gorgonzola", "brie", "brie cheese", "camembert", "gouda",
            "gouda cheese", "havarti", "muenster", "munster", "gruyere", "gruyère", "manchego",
            "queso fresco", "queso blanco", "cotija", "cotija cheese", "string cheese",
            "cheese sticks", "shredded cheddar", "shredded mozzarella", "sliced cheese",
            "cheese slices", "cheese curds", "cheese sauce", "nacho cheese", "velveeta",
            "cheese", "egg", "eggs", "butter",
        ],
    ),
    (
        "Frozen",
        &[
            "frozen spinach", "frozen broccoli", "frozen cauliflower",
            "frozen mixed vegetables", "frozen vegetable medley", "frozen green beans",
            "frozen peas and carrots", "frozen onions", "frozen peppers",
            "frozen stir fry vegetables", "frozen edamame", "frozen brussels sprouts",
            "frozen vegetables", "frozen vegetable", "frozen chicken", "frozen chicken breast",
            "frozen chicken tenders", "frozen fish", "frozen salmon", "frozen tilapia",
            "frozen shrimp", "frozen prawns", "frozen meatballs", "frozen burgers",
            "frozen patties", "frozen french fries", "frozen fries", "french fries",
            "tater tots", "frozen tater tots", "frozen hash browns", "hash browns",
            "frozen onion rings", "frozen waffles", "waffles", "frozen pancakes", "pancakes",
            "frozen breakfast sandwiches", "frozen pizza", "frozen dinner", "frozen meal",
            "tv dinner", "frozen lasagna", "frozen pot pie", "chicken pot pie", "ice cream",
            "frozen yogurt", "gelato", "sorbet", "sherbet", "popsicles", "ice pops",
            "frozen pie", "frozen cheesecake", "frozen pie crust", "frozen pizza dough",
            "frozen bread dough", "frozen rolls", "frozen puff pastry", "puff pastry",
            "frozen berries", "frozen fruit", "frozen fruit cocktail", "ice", "ice cubes",
            "bagged ice", "frozen corn", "frozen peas", "frozen",
        ],
    ),
    (
        "Pantry & Dry Goods",
        &[
            "lasagna noodles", "lasagne", "egg noodles", "lo mein noodles", "rice noodles",
            "pad thai noodles", "soba noodles", "udon noodles", "angel hair", "spaghetti",
            "linguine", "fettuccine", "penne", "rigatoni", "ziti", "mostaccioli", "macaroni",
            "elbow macaroni", "rotini", "fusilli", "farfalle", "bow tie pasta", "ravioli",
            "tortellini", "orzo", "ditalini", "ramen", "instant ramen", "instant noodles",
            "pasta", "noodles", "white rice", "brown rice", "jasmine rice", "basmati rice",
            "wild rice", "black rice", "arborio rice", "risotto rice", "minute rice",
            "instant rice", "rice pilaf", "rice", "quinoa", "oats", "oatmeal", "rolled oats",
            "steel cut oats", "instant oatmeal", "barley", "wheat", "polenta", "cornmeal",
            "grits", "corn grits", "bulgur", "bulgur wheat", "farro", "couscous", "millet",
            "amaranth", "teff", "white corn tortillas", "corn tortillas", "flour tortillas",
            "tortilla", "tortillas", "english muffins", "pita bread", "pita", "pita chips",
            "naan", "naan bread", "bagel", "dinner rolls", "sandwich rolls", "hot dog buns",
            "hamburger buns", "brioche rolls", "rolls", "burger buns", "buns", "taco shells",
            "hard taco shells", "soft taco shells", "tostadas", "tostada shells", "bread",
            "panko breadcrumbs", "graham cracker crumbs", "breadcrumbs", "bread crumbs",
            "croutons", "almond flour", "lupin flour", "coconut flour", "oat flour",
            "chickpea flour", "garbanzo bean flour", "besan", "tapioca flour",
            "arrowroot flour", "rice flour", "soy flour", "flour", "corn flakes",
            "frosted flakes", "cheerios", "granola", "cereal", "graham cracker",
            "graham crackers", "saltines", "ritz crackers", "crackers", "dried beans",
            "dried lentils", "split peas", "pinto beans", "great northern beans", "lentils",
            "chickpeas", "black beans", "kidney beans", "navy beans", "almonds", "walnuts",
            "pecans", "cashews", "peanuts", "sunflower seeds", "chia seeds",
            "canned diced tomatoes", "canned crushed tomatoes", "canned whole tomatoes",
            "canned tomatoes", "tomato paste", "canned green chiles",
            "canned diced green chiles", "canned black beans", "canned kidney beans",
            "canned pinto beans", "canned chickpeas", "canned garbanzo beans", "canned beans",
            "refried beans", "canned corn", "canned peas", "canned tuna", "canned salmon",
            "canned sardines", "canned chicken", "canned ham", "chicken broth", "beef broth",
            "vegetable broth", "chicken stock", "beef stock", "vegetable stock", "broth",
            "stock", "canned soup", "condensed soup", "canned pumpkin", "pumpkin puree",
            "canned coconut cream", "canned evaporated milk", "canned olives", "coconut milk",
            "hominy", "tortilla chips", "potato chips", "chips", "pretzel sticks", "pretzels",
            "microwave popcorn", "popcorn", "rice cakes", "trail mix", "mixed nuts",
            "granola bars", "protein bars", "energy bars", "peanut butter", "almond butter",
            "cashew butter", "nut butter", "nutella", "chocolate spread", "jam", "jelly",
            "preserves", "marmalade", "raw honey", "manuka honey", "honey", "maple syrup",
            "pancake syrup", "agave nectar", "agave syrup", "molasses", "blackstrap molasses",
            "dried cranberries", "craisins", "dried apricots", "dried cherries", "prunes",
            "dried figs", "dried mango", "stuffing", "stuffing mix", "bread stuffing",
            "vital wheat gluten",
        ],
    ),
    (
        "Condiments & Sauces",
        &[
            "ketchup", "dijon mustard", "yellow mustard", "american mustard", "mustard",
            "mayonnaise", "mayo", "pickle relish", "sweet relish", "relish", "tartar sauce",
            "cocktail sauce", "prepared horseradish", "horseradish", "wasabi", "wasabi paste",
            "buffalo wing sauce", "wing sauce", "hot sauce", "bbq sauce", "sriracha",
            "tabasco", "frank's red hot", "sweet chili sauce", "chili garlic sauce",
            "chili sauce", "soy sauce", "fish sauce", "oyster sauce", "hoisin sauce",
            "teriyaki sauce", "teriyaki", "stir fry sauce", "stir-fry sauce", "worcestershire",
            "apple cider vinegar", "cider vinegar", "balsamic vinegar", "balsamic",
            "red wine vinegar", "white wine vinegar", "rice vinegar", "rice wine vinegar",
            "sherry vinegar", "malt vinegar", "white vinegar", "distilled vinegar", "vinegar",
            "salad dressing", "ranch", "italian dressing", "thousand island",
            "thousand island dressing", "caesar dressing", "caesar", "blue cheese dressing",
            "balsamic vinaigrette", "vinaigrette", "honey mustard", "honey mustard dressing",
            "french dressing", "greek dressing", "marinara", "marinara sauce", "tomato sauce",
            "pasta sauce", "alfredo sauce", "alfredo", "basil pesto", "pesto sauce", "pesto",
            "vodka sauce", "pizza sauce", "bolognese", "bolognese sauce", "enchilada sauce",
            "tomato passata", "brown gravy", "turkey gravy", "gravy", "au jus", "hollandaise",
            "hollandaise sauce", "bearnaise", "béarnaise sauce", "chimichurri", "tahini sauce",
            "tzatziki", "tzatziki sauce", "curry sauce", "pad thai sauce", "satay sauce",
            "peanut sauce", "mole sauce", "dill pickles", "pickles", "gherkins",
            "pickled jalapenos", "pickled onions", "pickled peppers", "pickled vegetables",
            "capers", "caper berries", "pepperoncini", "banana peppers", "salsa verde",
            "salsa", "pico de gallo", "guacamole", "jalapeño", "jalapenos", "crema",
            "anchovy paste", "burger sauce", "puree", "black olives", "olives",
        ],
    ),
    (
        "Baking",
        &[
            "yellow cake mix", "chocolate cake mix", "cake mix", "brownie mix", "muffin mix",
            "pancake mix", "bisquick", "biscuit mix", "cornbread mix", "cookie mix",
            "baking powder", "baking soda", "bicarbonate of soda", "active dry yeast",
            "instant yeast", "yeast", "cream of tartar", "light brown sugar",
            "dark brown sugar", "brown sugar", "powdered sugar", "confectioners' sugar",
            "icing sugar", "granulated sugar", "caster sugar", "superfine sugar", "raw sugar",
            "turbinado sugar", "demerara sugar", "coconut sugar", "sugar", "light corn syrup",
            "dark corn syrup", "corn syrup", "golden syrup", "monkfruit sweetener",
            "keto sweetener", "artificial sweetener", "stevia", "truvia", "splenda",
            "erythritol", "xylitol", "sweetener", "vanilla extract", "almond extract",
            "peppermint extract", "mint extract", "lemon extract", "orange extract",
            "coconut extract", "maple extract", "vanilla bean", "vanilla beans", "vanilla",
            "food coloring", "food dye", "rose water", "orange blossom water",
            "semi-sweet chocolate chips", "milk chocolate chips", "dark chocolate chips",
            "white chocolate chips", "mini chocolate chips", "chocolate chips",
            "unsweetened chocolate", "bittersweet chocolate", "baking chocolate",
            "dutch process cocoa", "cocoa powder", "chocolate bars", "baking bars",
            "chocolate chunks", "butterscotch chips", "peanut butter chips", "cinnamon chips",
            "espresso powder", "vegetable shortening", "shortening", "crisco", "lard",
            "shredded coconut", "coconut flakes", "sweetened coconut", "coconut",
            "golden raisins", "toffee bits", "heath bits", "sprinkles", "jimmies",
            "nonpareils", "candy melts", "almond bark", "mini marshmallows", "marshmallows",
            "marshmallow fluff", "cherry pie filling", "apple pie filling", "pie filling",
            "graham cracker crust", "pie crust", "phyllo dough", "filo dough", "frosting",
            "icing", "buttercream", "fondant", "meringue powder", "tapioca", "tapioca pearls",
            "candied ginger", "crystallized ginger", "cornstarch", "gelatin",
        ],
    ),
    (
        "Beverages",
        &[
            "orange juice", "apple juice", "cranberry juice", "grape juice", "pineapple juice",
            "grapefruit juice", "tomato juice", "vegetable juice", "v8", "lemonade", "limeade",
            "fruit punch", "juice", "bottled water", "spring water", "sparkling water",
            "seltzer", "club soda", "tonic water", "mineral water", "coconut water", "water",
            "cola", "coke", "pepsi", "sprite", "7up", "ginger ale", "root beer", "dr pepper",
            "mountain dew", "soda", "gatorade", "powerade", "sports drink", "energy drink",
            "red bull", "monster", "vitamin water", "enhanced water", "ground coffee",
            "coffee beans", "instant coffee", "espresso", "espresso beans", "iced coffee",
            "cold brew", "coffee", "chai", "chai tea", "black tea", "green tea", "herbal tea",
            "iced tea", "sweet tea", "matcha", "matcha powder", "tea", "hot chocolate",
            "hot cocoa mix", "cocoa", "apple cider", "hot cider", "cider", "red wine",
            "white wine", "rosé", "wine", "lager", "ale", "ipa", "beer", "champagne",
            "prosecco", "sparkling wine", "vodka", "rum", "whiskey", "bourbon", "tequila",
            "gin", "liqueur", "schnapps", "sake", "protein shake", "protein drink",
            "meal replacement", "ensure", "slim fast", "kombucha", "horchata", "eggnog",
            "almond milk", "oat milk", "soy milk", "cashew milk", "rice milk", "hemp milk",
        ],
    ),
    (
        "Specialty Items",
        &[
            "olive oil", "coconut oil", "sesame oil", "avocado oil", "vegetable oil",
            "canola oil", "peanut oil", "grapeseed oil", "sunflower oil", "safflower oil",
            "walnut oil", "hazelnut oil", "flaxseed oil", "hemp oil", "mct oil", "ghee",
            "clarified butter", "flax seed", "flaxseed", "ground flaxseed", "hemp seeds",
            "hemp hearts", "pumpkin seeds", "pepitas", "black sesame seeds", "sesame seeds",
            "poppy seeds", "plant protein", "vanilla protein", "protein powder",
            "protein cookies", "scoops", "beyond meat", "impossible meat", "plant-based meat",
            "vegan sausage", "vegan burger", "veggie burger", "tvp",
            "textured vegetable protein", "tofu", "tempeh", "seitan", "vegan cheese",
            "dairy-free cheese", "vegan butter", "dairy-free butter", "coconut cream",
            "kimchi", "sauerkraut", "fermented cabbage", "white miso", "red miso", "miso",
            "miso paste", "nori", "seaweed", "seaweed sheets", "wakame", "kombu", "kelp",
            "rice paper", "spring roll wrappers", "wonton wrappers", "dumpling wrappers",
            "panko", "japanese breadcrumbs", "protein bar", "quest bar", "clif bar",
            "fiber supplement", "psyllium husk", "collagen powder", "spirulina", "chlorella",
            "whey protein", "xanthan gum", "guar gum", "agar agar", "truffle oil", "tahini",
            "nutritional yeast", "agave", "liquid smoke", "activated charcoal",
        ],
    ),
];

//! Static service taxonomy.
//!
//! Compiled in and never edited by the admin tools; it feeds the services
//! section and the search index.

use serde::Serialize;

type GroupTable = &'static [(&'static str, &'static [&'static str])];

const TAXONOMY: &[(&str, &str, GroupTable)] = &[
    (
        "print",
        "Print & Marketing Services",
        &[
            (
                "Stationery & Corporate Identity",
                &[
                    "Business Cards", "Letterheads", "Envelopes", "Folders", "Notepads",
                    "Notebook & Journal", "Binding", "Thank You Cards", "Certificates",
                    "Calendars", "Hang Tags",
                ],
            ),
            (
                "Brochures & Flyers",
                &[
                    "Brochures", "Flyers", "Booklets & Catalogues", "Seals", "Self Ink Stamps",
                    "Wax Seal", "Embossing Seal", "Voucher Books", "Invoice Books",
                    "Receipt Vouchers",
                ],
            ),
            (
                "Stickers",
                &[
                    "Die Cut Stickers", "Print & Cut Stickers", "Paper Sticker Gloss / Matt",
                    "Transparent Stickers", "PVC Stickers White", "Epoxy Stickers",
                    "Windshield Stickers", "Stencil Stickers", "Foil Stickers", "Metal Stickers",
                    "Embossing Seal Stickers", "Hologram Stickers", "Kraft Paper Stickers",
                ],
            ),
            (
                "Crowd Promotion",
                &[
                    "Compliment Slips", "Tickets & Coupons", "Scratch & Win Coupons", "Tent Cards",
                    "Car Mat", "Table Mat", "CD / DVD", "CD / DVD Printing", "CD / DVD Covers",
                ],
            ),
        ],
    ),
    (
        "fashion",
        "Fashion & Textile Services",
        &[
            (
                "Fashion",
                &[
                    "Scarf", "Sheila", "Bandana", "Hair Scarf", "Bag Scarf", "Abaya", "Sarong",
                    "Beach Shorts", "Pocket Handkerchief", "Woven Fabric Labels", "Scrunchie",
                ],
            ),
            (
                "Soft Furnishing",
                &[
                    "Curtains", "Blanket", "Decorative Pillows", "Tiny Cushion", "Floor Cushion",
                    "Bolster Pillow", "Bean Bags", "Fabric Wrap",
                ],
            ),
            (
                "Pouches",
                &["Velvet Pouches", "Tote Pouches", "Silk Sensation Pouches", "Zipper Pouches"],
            ),
            (
                "Lifestyle & Dining",
                &[
                    "Armband", "Sash", "Hand Umbrella", "Beach Towel", "Apron", "Face Masks",
                    "Placemat", "Table Napkin", "Dinning Table Cloth",
                ],
            ),
            (
                "HOT Textile Roll",
                &[
                    "Fabric Range", "Haute Couture", "Fashion Wear", "Monroe Satin", "Patterns",
                    "Floral", "Geometric", "Landscape",
                ],
            ),
        ],
    ),
    (
        "office",
        "Office & Store Branding Services",
        &[
            ("Frosted Sticker", &["Reverse Cut", "Standard Cut", "Printed", "Blank"]),
            (
                "Window Branding",
                &["Vinyl Lettering", "Graphics", "One Way Vision Sticker", "Window Films"],
            ),
            ("Wall Branding", &["Vinyl Lettering", "Sticker", "Decal"]),
            ("Wall Décor", &["Bedroom Wallpaper", "Living Room Wallpaper"]),
            ("Wall Frames", &["Canvas", "Wooden", "Acrylic", "Metal Art"]),
            (
                "POS Display Stands",
                &["Floor Display Gondola", "3D Display Stand", "Counter Top Stand"],
            ),
            ("Posters", &["Large Posters", "Wall Mounted", "Hanging Posters"]),
            (
                "Magnetic Sheet",
                &["Car Magnets", "Fridge Magnets", "Magnetic Wall", "Domed Magnet"],
            ),
            ("Vehicle Graphics", &["Car Branding", "Boat/Yacht Branding"]),
            ("Repositionable Cling", &["Clear Static Cling", "Shape Cut Out Cling"]),
            ("Floor Sticker", &["Direction Sticker", "Footprint Floor Sticker"]),
            ("Workplace", &["Ceremonial Ribbon", "Counter Partition"]),
        ],
    ),
    (
        "signages",
        "All Signages Services",
        &[
            (
                "Sign Board / Signage",
                &[
                    "3D Signage (Unlit)", "Backlit Signage", "Outlit 3D Signage",
                    "Flex Face Signage", "Frontlit Signage", "Push Through Signage",
                    "Neon Signage",
                ],
            ),
            (
                "Name Plate",
                &[
                    "Metal Name Plates", "Acrylic Name Plates", "Wooden Name Plates",
                    "Table Top Signage",
                ],
            ),
            (
                "Light Box Signages",
                &[
                    "Flex Face Signs (Light Box)", "Fabric Light Box", "Acrylic Signage Board",
                    "Poster Light Box",
                ],
            ),
            (
                "Self Standing Letters",
                &["Metal Letters", "Wooden Letters", "Acrylic Letters", "Forex / Foam Letters"],
            ),
            (
                "Direction / Wayfinding Signage",
                &[
                    "Wall Mounted Signage", "Hanging Signage", "Self Standing Signage",
                    "Directory Signage",
                ],
            ),
            (
                "Labels & Safety Signage",
                &[
                    "Traffolyte / PVC / Acrylic Labels", "Metal Labels", "Wooden Labels",
                    "Safety Signage", "Floor Sign / Signage",
                ],
            ),
        ],
    ),
    (
        "flags",
        "All Flags Services",
        &[
            (
                "Event & Branding Flags",
                &["Sail Flags", "Tear Drop Flags", "L Shape Flags", "Blade Flags", "Telescopic Flags"],
            ),
            (
                "Flag Bases & Accessories",
                &["Concrete Base", "Cross Base", "Water Base", "Advertising Flags"],
            ),
            (
                "Office & Outdoor Flags",
                &[
                    "Table Flags (Standard & Royal)", "Conference Flags (Standing & Hanging)",
                    "Hoisting Flags", "Wall Mounted Flags", "Stadium Flags", "Festival Flags",
                ],
            ),
            (
                "Event & Decorative Gear",
                &[
                    "Pole Flags", "Hand Flags", "Finish Line Banners", "Body Flags", "Fan Scarves",
                    "Car Flags", "Dashboard Flags", "Pennant Flags", "Bunting Flags",
                ],
            ),
        ],
    ),
    (
        "standees",
        "Standees and Backdrops Services",
        &[
            (
                "Standees",
                &[
                    "Roll-Up Banners", "X-Stand Banners", "L-Stand Banners",
                    "Pop-Up A-Frame Banners", "Custom Cutout Standees",
                ],
            ),
            (
                "Backdrops",
                &[
                    "Pop-Up Displays", "Fabric Tube Displays", "Step & Repeat Banners",
                    "Stage Backdrops", "Photo Booth Backdrops",
                ],
            ),
            (
                "Accessories & Frames",
                &[
                    "Banner Stand Hardware", "Adjustable Backdrop Frames", "Travel Cases & Bags",
                    "LED Lighting Kits",
                ],
            ),
        ],
    ),
    (
        "gifts",
        "Corporate Gifts & Bags Services",
        &[
            (
                "Office Essentials",
                &["Pens", "PU Notebooks", "PU Organizer", "Corporate Gift Sets", "Mouse Pad"],
            ),
            ("Drinkware", &["Mugs", "Bottles", "Tumblers", "Coaster", "Coffee Stencil"]),
            (
                "Apparel",
                &[
                    "T-Shirt", "Jersey", "Caps", "Neck Tie", "Safety Vest", "Embroidery Patches",
                    "Silicone Labels",
                ],
            ),
            ("Event Disposables", &["Napkin", "Paper Cup", "Water Bottle Label"]),
            (
                "Trade Shows & Events",
                &[
                    "Wristband", "Lanyards", "ID Cards & Badge Reel", "Name Badges", "Lapel Pins",
                    "Keychain", "Silicone Fridge Magnet",
                ],
            ),
            ("Tech Products", &["USB", "Power Banks", "Bluetooth Speakers", "Charging Cables"]),
            (
                "Shopping/Promotional Bags",
                &[
                    "Paper Bag", "Kraft Bag", "Jute Bag", "Tote Bag", "Canvas Bag",
                    "Drawstring Bag", "Cotton String Bag",
                ],
            ),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    /// Short id used for the service detail modal (e.g. `"print"`)
    pub id: String,
    pub title: String,
    pub groups: Vec<ServiceGroup>,
}

impl ServiceCategory {
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Ordered list of service categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceTaxonomy {
    pub categories: Vec<ServiceCategory>,
}

impl ServiceTaxonomy {
    /// The compiled-in taxonomy
    pub fn builtin() -> Self {
        let categories = TAXONOMY
            .iter()
            .map(|(id, title, groups)| ServiceCategory {
                id: id.to_string(),
                title: title.to_string(),
                groups: groups
                    .iter()
                    .map(|(name, items)| ServiceGroup {
                        name: name.to_string(),
                        items: items.iter().map(|s| s.to_string()).collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { categories }
    }

    pub fn get(&self, id: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}

impl Default for ServiceTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

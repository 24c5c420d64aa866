//! Compiled-in default content.
//!
//! Used on first visit, when persisted content is missing or unreadable, and by
//! the admin "reset to default" action.

use crate::model::{
    FaqItem, ProcessStep, Product, ProductCatalog, Project, SiteContent, SiteImages, TeamMember,
    Testimonial,
};

fn product(name: &str, price: &str, description: &str, image: &str) -> Product {
    Product {
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        category: None,
    }
}

fn project(category: &str, title: &str, description: &str, image: &str) -> Project {
    Project {
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

fn member(name: &str, role: &str, image: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        image: image.to_string(),
    }
}

fn testimonial(quote: &str, name: &str, title: &str, image: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        image: image.to_string(),
    }
}

fn step(icon: &str, title: &str, description: &str) -> ProcessStep {
    ProcessStep {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// Default product catalog (8 products)
pub fn default_catalog() -> ProductCatalog {
    ProductCatalog::new(vec![
        product(
            "Premium Business Cards (x100)",
            "LKR 2,500",
            "350gsm matte laminated cards with sharp, vibrant colors.",
            "https://images.unsplash.com/photo-1619454018014-a3c3b2f5b61c?q=80&w=400&h=300&auto=format&fit=crop",
        ),
        product(
            "A5 Flyers (x500)",
            "LKR 8,000",
            "High-quality 150gsm gloss paper, perfect for promotions.",
            "https://images.unsplash.com/photo-1599310219803-7023051005a9?q=80&w=400&h=300&auto=format&fit=crop",
        ),
        product(
            "Roll-Up Banner (Standard)",
            "LKR 12,500",
            "Durable, portable, and easy to set up for any event.",
            "https://images.unsplash.com/photo-1611754407519-281b1e96a4e3?q=80&w=400&h=300&auto=format&fit=crop",
        ),
        product(
            "Custom Mugs (x10)",
            "LKR 4,500",
            "Personalized ceramic mugs, ideal for corporate branding.",
            "https://images.unsplash.com/photo-1611937553538-4a4a5b5a2a2a?q=80&w=400&h=300&auto=format&fit=crop",
        ),
        product(
            "A4 Branded Notepads (x25)",
            "LKR 6,000",
            "Professionally designed notepads for office or client use.",
            "https://images.unsplash.com/photo-1583485312954-07318a38a1e8?q=80&w=400&h=300&auto=format&fit=crop",
        ),
        product(
            "Event T-Shirts (x20)",
            "LKR 15,000",
            "High-quality cotton t-shirts with custom screen printing.",
            "https://images.unsplash.com/photo-1583743814966-8936f5b7be1a?q=80&w=400&h=300&auto=format&fit=crop",
        ),
        product(
            "Die-Cut Stickers (x100)",
            "LKR 3,000",
            "Custom shape vinyl stickers, waterproof and durable.",
            "https://images.unsplash.com/photo-1621987569796-1c223c52a0d9?q=80&w=400&h=300&auto=format&fit=crop",
        ),
        product(
            "Canvas Tote Bags (x50)",
            "LKR 20,000",
            "Eco-friendly tote bags with your custom design printed.",
            "https://images.unsplash.com/photo-1572196242099-61c16b4457d4?q=80&w=400&h=300&auto=format&fit=crop",
        ),
    ])
}

/// Default site content
pub fn default_site_content() -> SiteContent {
    SiteContent {
        images: SiteImages {
            logo: "https://i.imgur.com/gJeS3c4.png".to_string(),
            hero: "https://images.unsplash.com/photo-1626785774573-4b799315345d?q=80&w=600&h=600&auto=format&fit=crop".to_string(),
            about: "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=800&h=600&auto=format&fit=crop".to_string(),
        },
        projects: vec![
            project(
                "Print & Marketing",
                "Kattankudy Municipal Council Brochures",
                "Designed and printed informative brochures for local government initiatives.",
                "https://images.unsplash.com/photo-1599946347372-f8a63a56d98d?q=80&w=600&h=400&auto=format&fit=crop",
            ),
            project(
                "Stationery & Branding",
                "Batticaloa Cafe Menu Printing",
                "Created durable, beautifully designed menus for a popular local cafe.",
                "https://images.unsplash.com/photo-1544148103-0773bf10d330?q=80&w=600&h=400&auto=format&fit=crop",
            ),
            project(
                "Print & Marketing",
                "Arugam Bay Surf Season Flyers",
                "Produced vibrant, eye-catching flyers to promote events during the surf season.",
                "https://images.unsplash.com/photo-1582287232363-5c82a55a0242?q=80&w=600&h=400&auto=format&fit=crop",
            ),
            project(
                "Corporate Gifts",
                "Pasikudah Resort Welcome Kit Printing",
                "Assembled and printed premium welcome kits for a luxury beach resort.",
                "https://images.unsplash.com/photo-1614036125032-005667425934?q=80&w=600&h=400&auto=format&fit=crop",
            ),
            project(
                "Event Branding",
                "Eastern University Event Banners",
                "Delivered large-format banners and branding materials for a university event.",
                "https://images.unsplash.com/photo-1556761175-b413da4baf72?q=80&w=600&h=400&auto=format&fit=crop",
            ),
            project(
                "Signages & Backdrops",
                "Batticaloa Food Festival Backdrop",
                "Constructed a large, themed backdrop for the city's annual food festival.",
                "https://images.unsplash.com/photo-1511795409834-ef04bbd51725?q=80&w=600&h=400&auto=format&fit=crop",
            ),
        ],
        team: vec![
            member(
                "Alex Johnson",
                "Founder & CEO",
                "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?q=80&w=200&h=200&auto=format&fit=crop",
            ),
            member(
                "Samantha Lee",
                "Lead Designer",
                "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=200&h=200&auto=format&fit=crop",
            ),
        ],
        testimonials: vec![
            testimonial(
                "INK Spire transformed our local cafe's branding with their incredible menu and flyer designs. The quality was exceptional, and our customers in Batticaloa love the new look!",
                "Sahan Perera",
                "Owner, The Lighthouse Cafe",
                "https://images.unsplash.com/photo-1615109398623-88346a601842?q=80&w=100&h=100&auto=format&fit=crop",
            ),
            testimonial(
                "Their team handled all the branding for our annual tech conference in Colombo, from banners to corporate gifts. Professional, creative, and delivered on time. Highly recommended.",
                "Fathima Rauf",
                "Event Coordinator, CodeFest Sri Lanka",
                "https://images.unsplash.com/photo-1619208479987-a3e9057b5a2b?q=80&w=100&h=100&auto=format&fit=crop",
            ),
            testimonial(
                "We needed high-quality custom apparel for our new clothing line. INK Spire's textile printing service was flawless. The colors are vibrant and the fabric quality is excellent.",
                "Rajiv Kumar",
                "Founder, Kandy Trends",
                "https://images.unsplash.com/photo-1599566150163-29194dcaad36?q=80&w=100&h=100&auto=format&fit=crop",
            ),
            testimonial(
                "The team at INK Spire delivered stunning standees and backdrops for our hotel launch in Galle. Their attention to detail and creative input was invaluable.",
                "Anusha Silva",
                "Marketing Manager, Galle Fort Hotel",
                "https://images.unsplash.com/photo-1610216705422-caa3fcb6d158?q=80&w=100&h=100&auto=format&fit=crop",
            ),
            testimonial(
                "For our resort in Trincomalee, we needed durable and beautiful outdoor signage. INK Spire exceeded our expectations with weather-resistant signs that perfectly match our brand.",
                "David Ratnayake",
                "General Manager, Trinco Blu",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=100&h=100&auto=format&fit=crop",
            ),
        ],
        process: vec![
            step(
                "CONSULTATION",
                "Consultation & Quote",
                "We start by understanding your vision, requirements, and budget to provide a tailored quote and timeline.",
            ),
            step(
                "DESIGN",
                "Design & Proofing",
                "Our creative team designs the artwork. You'll receive a digital proof for approval before we proceed to print.",
            ),
            step(
                "PRODUCTION",
                "Production",
                "Once approved, your project moves to our state-of-the-art production facility where we bring it to life with precision.",
            ),
            step(
                "DELIVERY",
                "Delivery & Follow-up",
                "We ensure your finished products are delivered safely and on time. We follow up to guarantee your complete satisfaction.",
            ),
        ],
        faq: vec![
            faq(
                "What are your business hours?",
                "Our office is open from 9:00 AM to 6:00 PM, Monday through Saturday. We are closed on Sundays and public holidays.",
            ),
            faq(
                "What file formats do you accept for printing?",
                "We prefer print-ready PDF files. We also accept Adobe Illustrator (.ai), Photoshop (.psd), and high-resolution JPEGs or PNGs. For best results, please ensure your files have a 300 DPI resolution and are in CMYK color mode.",
            ),
            faq(
                "What is your typical turnaround time?",
                "Turnaround time varies depending on the project complexity and quantity. Standard business cards take 2-3 business days, while larger projects like banners may take 5-7 business days. We will provide a precise timeline with your quote.",
            ),
            faq(
                "Can you ship orders outside of the Eastern Province?",
                "Yes, we offer island-wide delivery across Sri Lanka. Shipping charges will be calculated based on your location and the weight of the order.",
            ),
            faq(
                "Do you offer design services?",
                "Absolutely! Our talented team of designers can help you create stunning artwork from scratch or refine your existing designs. Just let us know your requirements during the consultation.",
            ),
        ],
    }
}

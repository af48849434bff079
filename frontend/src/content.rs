//! Copy and imagery for every page.

use crate::Route;

macro_rules! unsplash {
    ($id:literal) => {
        concat!("https://images.unsplash.com/photo-", $id, "&auto=format&fit=crop")
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub suffix: &'static str,
    pub is_year: bool,
}

pub const STATS: &[Stat] = &[
    Stat { value: crate::config::FOUNDED_YEAR, label: "FOUNDED", suffix: "", is_year: true },
    Stat { value: 8, label: "TEAM MEMBERS", suffix: "", is_year: false },
    Stat { value: 500, label: "PROJECTS", suffix: "+", is_year: false },
    Stat { value: 100, label: "HAPPY CLIENTS", suffix: "%", is_year: false },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceTeaser {
    pub route: Route,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const HOME_SERVICES: &[ServiceTeaser] = &[
    ServiceTeaser {
        route: Route::Contact,
        title: "emergency",
        description: "Burst pipes, leaks, or flooding? Our 24/7 emergency team responds fast to minimize damage and restore your plumbing system quickly.",
        image: unsplash!("1584622650111-993a426fbf0a?q=80&w=2070"),
    },
    ServiceTeaser {
        route: Route::Heating,
        title: "heating",
        description: "From water heater installation to radiant floor heating, we ensure your home stays warm and comfortable year-round with energy-efficient solutions.",
        image: unsplash!("1585128792020-803d29415281?q=80&w=2070"),
    },
    ServiceTeaser {
        route: Route::Drainage,
        title: "drainage",
        description: "Professional drain cleaning, hydro jetting, and sewer line repairs. We clear blockages and prevent future clogs with modern technology.",
        image: unsplash!("1504328345606-18bbc8c9d7d1?q=80&w=2070"),
    },
];

pub const HOME_REFERENCES: &[&str] = &[
    unsplash!("1552321554-5fefe8c9ef14?q=80&w=1887"),
    unsplash!("1620626011761-996317b8d101?q=80&w=2069"),
    unsplash!("1584622650111-993a426fbf0a?q=80&w=2070"),
    unsplash!("1507089947368-19c1da9775ae?q=80&w=2076"),
    unsplash!("1600566752355-35792bedcfea?q=80&w=1887"),
    unsplash!("1600585154340-be6161a56a0c?q=80&w=2070"),
    unsplash!("1604709177225-055f99402ea3?q=80&w=2070"),
    unsplash!("1564540586988-aa4e53c3d799?q=80&w=2070"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Michael Thompson",
        role: "CEO / MASTER PLUMBER",
        image: unsplash!("1507003211169-0a1dd7228f2d?w=400&h=500"),
    },
    TeamMember {
        name: "David Chen",
        role: "MASTER PLUMBER",
        image: unsplash!("1500648767791-00dcc994a43e?w=400&h=500"),
    },
    TeamMember {
        name: "Sarah Williams",
        role: "SERVICE MANAGER",
        image: unsplash!("1494790108377-be9c29b29330?w=400&h=500"),
    },
    TeamMember {
        name: "James Rodriguez",
        role: "SENIOR TECHNICIAN",
        image: unsplash!("1472099645785-5658abf4ff4e?w=400&h=500"),
    },
    TeamMember {
        name: "Emily Parker",
        role: "APPRENTICE PLUMBER",
        image: unsplash!("1438761681033-6461ffad8d80?w=400&h=500"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub title: &'static str,
    pub text: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        title: "Outstanding Service",
        text: "AquaFix responded to our emergency call within 30 minutes. Professional, efficient, and fair pricing. They fixed our burst pipe and even cleaned up afterward.",
        name: "Jennifer Walsh",
        role: "private customer",
        image: unsplash!("1494790108377-be9c29b29330?w=100&h=100"),
    },
    Testimonial {
        title: "Excellent Work",
        text: "We hired AquaFix for a complete bathroom renovation. The team was knowledgeable, punctual, and delivered exceptional quality work.",
        name: "Robert Martinez",
        role: "private customer",
        image: unsplash!("1472099645785-5658abf4ff4e?w=100&h=100"),
    },
    Testimonial {
        title: "Top Service",
        text: "As a property manager, I need reliable plumbers. AquaFix has become our go-to team for all maintenance and emergencies.",
        name: "Amanda Chen",
        role: "property manager",
        image: unsplash!("1438761681033-6461ffad8d80?w=100&h=100"),
    },
    Testimonial {
        title: "Very Professional",
        text: "Had a complex drainage issue that other plumbers couldn't solve. AquaFix diagnosed and fixed it in one visit. Highly recommend!",
        name: "Thomas Anderson",
        role: "private customer",
        image: unsplash!("1500648767791-00dcc994a43e?w=100&h=100"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Quality First",
        description: "We never compromise on quality. Every project receives the same level of attention and craftsmanship.",
    },
    CompanyValue {
        title: "Customer Focus",
        description: "Your satisfaction is our priority. We listen, understand, and deliver solutions tailored to your needs.",
    },
    CompanyValue {
        title: "Reliability",
        description: "When we make a commitment, we keep it. Punctual, professional, and dependable service every time.",
    },
    CompanyValue {
        title: "Innovation",
        description: "We stay current with the latest technologies and methods to provide the best solutions available.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2015",
        title: "Company Founded",
        description: "AquaFix was established in Vancouver with a mission to provide exceptional plumbing services.",
    },
    Milestone {
        year: "2017",
        title: "Expanded Services",
        description: "Added heating and drainage services to meet growing customer demand.",
    },
    Milestone {
        year: "2020",
        title: "Green Initiative",
        description: "Launched our solar and sustainable energy division for eco-conscious customers.",
    },
    Milestone {
        year: "2023",
        title: "500+ Projects",
        description: "Reached milestone of completing over 500 successful projects across Vancouver.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubService {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Everything a service category page renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub hero_images: &'static [&'static str],
    pub intro: &'static str,
    pub feature_image: &'static str,
    pub features: &'static [&'static str],
    pub closing: &'static str,
    pub offerings_heading: &'static str,
    pub offerings: &'static [SubService],
}

pub const SANITARY: ServiceContent = ServiceContent {
    title: "SANITARY",
    tagline: "we are a certified company & provide best plumbing services for you & your company.",
    hero_images: &[unsplash!("1620626011761-996317b8d101?q=80&w=2069")],
    intro: "Would you like a new bathroom? Or would you like to carry out a long-overdue modernization? In us you will find a competent and reliable partner.",
    feature_image: unsplash!("1507089947368-19c1da9775ae?q=80&w=2076"),
    features: &[
        "Comprehensive & competent advice",
        "Complete bathroom renovations",
        "Professional execution of all installation work",
        "High-quality materials and fixtures",
        "Expert plumbing and drainage solutions",
    ],
    closing: "As your plumbing company, we have all the important information for your remodeled bathroom. From planning to execution, we're with you every step.",
    offerings_heading: "Our Sanitary Services",
    offerings: &[
        SubService {
            title: "Bathroom Design",
            description: "Custom bathroom layouts tailored to your space and lifestyle needs.",
            image: unsplash!("1620626011761-996317b8d101?q=80&w=2069"),
        },
        SubService {
            title: "Fixture Installation",
            description: "Professional installation of sinks, toilets, showers, and bathtubs.",
            image: unsplash!("1584622650111-993a426fbf0a?q=80&w=2070"),
        },
        SubService {
            title: "Pipe & Drainage",
            description: "Complete plumbing solutions for new builds and renovations.",
            image: unsplash!("1504328345606-18bbc8c9d7d1?q=80&w=2070"),
        },
    ],
};

pub const HEATING: ServiceContent = ServiceContent {
    title: "HEATING",
    tagline: "expert heating solutions to keep your home warm and comfortable all year round with energy-efficient systems.",
    hero_images: &[unsplash!("1585128792020-803d29415281?q=80&w=2070")],
    intro: "Is your heating system outdated or inefficient? Looking to upgrade to a more eco-friendly solution? We provide comprehensive heating services from installation to maintenance, ensuring your comfort in every season.",
    feature_image: unsplash!("1585128792020-803d29415281?q=80&w=2070"),
    features: &[
        "Energy-efficient heating system installation",
        "Boiler repair and maintenance",
        "Radiant floor heating solutions",
        "Heat pump installation and service",
        "Annual heating system inspections",
        "Emergency heating repairs 24/7",
    ],
    closing: "From boiler installations to radiant floor heating, we have the expertise to keep your home warm efficiently. Trust our certified technicians for all your heating needs.",
    offerings_heading: "Our Heating Services",
    offerings: &[
        SubService {
            title: "Boilers & Furnaces",
            description: "Installation, tune-ups and repairs for gas and electric systems.",
            image: unsplash!("1558618666-fcd25c85cd64?q=80&w=2032"),
        },
        SubService {
            title: "Radiant Floors",
            description: "Even, silent warmth underfoot for new builds and renovations.",
            image: unsplash!("1613323593608-abc90fec84ff?q=80&w=2070"),
        },
        SubService {
            title: "Heat Pumps",
            description: "Efficient heating and cooling with lower running costs.",
            image: unsplash!("1581094794329-c8112a89af12?q=80&w=2070"),
        },
    ],
};

pub const DRAINAGE: ServiceContent = ServiceContent {
    title: "DRAINAGE",
    tagline: "professional drainage solutions to keep your pipes flowing freely. Fast response, lasting results.",
    hero_images: &[unsplash!("1585704032915-c3400ca199e7?q=80&w=2070")],
    intro: "Blocked drains causing problems? Slow drainage or unpleasant odors? Our expert team uses the latest technology to diagnose and resolve all drainage issues quickly and efficiently, minimizing disruption to your home or business.",
    feature_image: unsplash!("1504328345606-18bbc8c9d7d1?q=80&w=2070"),
    features: &[
        "Professional drain cleaning & unblocking",
        "CCTV drain inspections & surveys",
        "High-pressure water jetting",
        "Sewer line repair & replacement",
        "Root removal & prevention",
        "24/7 emergency drainage services",
    ],
    closing: "From simple blockages to complex sewer repairs, we have the expertise and equipment to handle any drainage challenge. Fast response times guaranteed.",
    offerings_heading: "Our Drainage Services",
    offerings: &[
        SubService {
            title: "Drain Cleaning",
            description: "Clearing blockages in sinks, showers and main lines.",
            image: unsplash!("1585704032915-c3400ca199e7?q=80&w=2070"),
        },
        SubService {
            title: "Camera Inspection",
            description: "Pinpointing cracks, roots and collapses without digging.",
            image: unsplash!("1621905252507-b35492cc74b4?q=80&w=2069"),
        },
        SubService {
            title: "Sewer Repair",
            description: "Trenchless relining and full line replacement.",
            image: unsplash!("1504328345606-18bbc8c9d7d1?q=80&w=2070"),
        },
    ],
};

pub const SOLAR: ServiceContent = ServiceContent {
    title: "SOLAR",
    tagline: "harness the power of the sun with our expert solar solutions for sustainable energy and lower utility bills.",
    hero_images: &[unsplash!("1509391366360-2e959784a276?q=80&w=2072")],
    intro: "Ready to reduce your carbon footprint and energy costs? Looking for a reliable partner for solar installation? We provide comprehensive solar solutions from consultation to installation and ongoing maintenance.",
    feature_image: unsplash!("1508514177221-188b1cf16e9d?q=80&w=2072"),
    features: &[
        "Solar panel installation & maintenance",
        "Solar water heating systems",
        "Energy efficiency consultation",
        "Grid-tied & off-grid solutions",
        "Battery storage systems",
        "Government rebate assistance",
    ],
    closing: "As your solar energy partner, we provide everything you need for a successful transition to renewable energy. From initial assessment to final installation, we're with you every step.",
    offerings_heading: "Our Solar Services",
    offerings: &[
        SubService {
            title: "Rooftop Panels",
            description: "Site survey, design and installation of photovoltaic arrays.",
            image: unsplash!("1509391366360-2e959784a276?q=80&w=2072"),
        },
        SubService {
            title: "Solar Hot Water",
            description: "Collectors that pre-heat your domestic water supply.",
            image: unsplash!("1508514177221-188b1cf16e9d?q=80&w=2072"),
        },
        SubService {
            title: "Battery Storage",
            description: "Keep the lights on and use more of what you generate.",
            image: unsplash!("1613323593608-abc90fec84ff?q=80&w=2070"),
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCategory {
    pub label: &'static str,
    pub images: &'static [&'static str],
}

pub const REFERENCE_HERO: &[&str] = &[
    unsplash!("1552321554-5fefe8c9ef14?q=80&w=1887"),
    unsplash!("1620626011761-996317b8d101?q=80&w=2069"),
    unsplash!("1584622650111-993a426fbf0a?q=80&w=2070"),
];

pub const REFERENCE_CATEGORIES: &[ReferenceCategory] = &[
    ReferenceCategory {
        label: "sanitary",
        images: &[
            unsplash!("1552321554-5fefe8c9ef14?q=80&w=1887"),
            unsplash!("1620626011761-996317b8d101?q=80&w=2069"),
            unsplash!("1584622650111-993a426fbf0a?q=80&w=2070"),
            unsplash!("1507089947368-19c1da9775ae?q=80&w=2076"),
            unsplash!("1600566752355-35792bedcfea?q=80&w=1887"),
            unsplash!("1600585154340-be6161a56a0c?q=80&w=2070"),
        ],
    },
    ReferenceCategory {
        label: "heating",
        images: &[
            unsplash!("1585128792020-803d29415281?q=80&w=2070"),
            unsplash!("1558618666-fcd25c85cd64?q=80&w=2032"),
            unsplash!("1613323593608-abc90fec84ff?q=80&w=2070"),
            unsplash!("1581094794329-c8112a89af12?q=80&w=2070"),
            unsplash!("1564540586988-aa4e53c3d799?q=80&w=2070"),
        ],
    },
    ReferenceCategory {
        label: "drainage",
        images: &[
            unsplash!("1585704032915-c3400ca199e7?q=80&w=2070"),
            unsplash!("1504328345606-18bbc8c9d7d1?q=80&w=2070"),
            unsplash!("1621905252507-b35492cc74b4?q=80&w=2069"),
            unsplash!("1600566752355-35792bedcfea?q=80&w=1887"),
            unsplash!("1600585154340-be6161a56a0c?q=80&w=2070"),
        ],
    },
];

pub const CONTACT_HERO: &[&str] = &[unsplash!("1600585154340-be6161a56a0c?q=80&w=2070")];
pub const ABOUT_HERO: &[&str] = &[unsplash!("1504328345606-18bbc8c9d7d1?q=80&w=2070")];
pub const HOME_HERO: &str = unsplash!("1552321554-5fefe8c9ef14?q=80&w=1887");

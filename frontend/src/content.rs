//! Static page content.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    PalmTree,
    Trees,
    Shovel,
    Droplets,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ServiceIcon,
}

#[derive(Debug, Clone, Copy)]
pub struct ShowcaseItem {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CustomerLogo {
    pub name: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "תכנון גינות",
        description: "תכנון מקצועי ומותאם אישית לצרכים שלכם",
        icon: ServiceIcon::PalmTree,
    },
    Service {
        title: "גיזום וכריתת עצים",
        description: "גיזום וכריתת עצים בכל גודל וסוג",
        icon: ServiceIcon::Trees,
    },
    Service {
        title: "תחזוקת גינות",
        description: "שירותי תחזוקה שוטפים לשמירה על גינה מטופחת",
        icon: ServiceIcon::Shovel,
    },
    Service {
        title: "מערכות השקיה",
        description: "התקנה ותחזוקה של מערכות השקיה חכמות",
        icon: ServiceIcon::Droplets,
    },
];

pub const PLANTERS: &[ShowcaseItem] = &[
    ShowcaseItem {
        id: 1,
        name: "אדנית ברזל לבנה",
        image: "/images/planter-white.jpg",
        description: "אדנית ברזל בגימור לבן מט",
    },
    ShowcaseItem {
        id: 2,
        name: "אדנית ברזל שחורה",
        image: "/images/planter-black.jpg",
        description: "אדנית ברזל בגימור שחור מט",
    },
    ShowcaseItem {
        id: 3,
        name: "אדנית ברזל מחלידה",
        image: "/images/planter-rust.jpg",
        description: "אדנית ברזל בגימור חלודה טבעית",
    },
];

pub const VERTICAL_GARDENS: &[ShowcaseItem] = &[
    ShowcaseItem {
        id: 1,
        name: "קיר ירוק למשרד",
        image: "/images/vertical-office.jpg",
        description: "שילוב מושלם של טבע בסביבת העבודה",
    },
    ShowcaseItem {
        id: 2,
        name: "קיר ירוק לבית",
        image: "/images/vertical-home.jpg",
        description: "הוספת חיים וצבע לחלל המגורים",
    },
    ShowcaseItem {
        id: 3,
        name: "קיר ירוק לחצר",
        image: "/images/vertical-yard.jpg",
        description: "יצירת אווירה טרופית בחצר הבית",
    },
];

pub const CUSTOMER_LOGOS: &[CustomerLogo] = &[
    CustomerLogo { name: "Ariel", image: "/logos/ariel.jpg" },
    CustomerLogo { name: "Amot", image: "/logos/amot.jpg" },
    CustomerLogo { name: "Alide", image: "/logos/alide.jpg" },
    CustomerLogo { name: "Pais", image: "/logos/pais.jpg" },
    CustomerLogo { name: "Supervision", image: "/logos/supervision.jpg" },
];

// SPDX-License-Identifier: MPL-2.0
//! Static portfolio copy.
//!
//! Everything on the page is fixed, trusted data; the interaction layer
//! never parses or validates it. Stat targets feed the counter animator,
//! the rest renders as-is.

pub const NAME: &str = "Dr. Maya R. Iyer";
pub const ROLE_BADGE: &str = "Assistant Professor & Research Coordinator";
pub const TAGLINE: &str =
    "Plant Breeding • Biotechnology • Plant Pathology • Molecular Biology Researcher";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Dr. Maya R. Iyer is an accomplished researcher with expertise in plant \
     breeding, biotechnology, plant physiology, genetics, and plant pathology.",
    "Currently serving as Assistant Professor at the School of Sciences and as \
     University Research Coordinator, she brings over eleven years of cumulative \
     experience across research, teaching, and field projects.",
    "She is recognized for strong communication skills, analytical thinking, and \
     problem-solving expertise, fostering innovation in molecular biology and \
     agricultural biotechnology.",
];

/// One animated statistic card.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        target: 11,
        suffix: "+",
        label: "Years Experience",
    },
    Stat {
        target: 17,
        suffix: "",
        label: "Research Publications",
    },
    Stat {
        target: 2,
        suffix: "",
        label: "Research Projects",
    },
    Stat {
        target: 2,
        suffix: "",
        label: "National Awards",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub score: &'static str,
}

pub const EDUCATION: [EducationEntry; 4] = [
    EducationEntry {
        degree: "Ph.D., Molecular Biology & Biotechnology",
        institution: "Anandvan Agricultural University",
        year: "2017",
        score: "79.3%",
    },
    EducationEntry {
        degree: "M.Sc., Plant Biotechnology",
        institution: "Anandvan Agricultural University",
        year: "2012",
        score: "78.5%",
    },
    EducationEntry {
        degree: "B.Sc., Biotechnology",
        institution: "Western Coast University",
        year: "2009",
        score: "69.2%",
    },
    EducationEntry {
        degree: "NET – Agricultural Research Council",
        institution: "National Agricultural Research Council",
        year: "2014",
        score: "Qualified",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub duties: &'static [&'static str],
}

pub const EXPERIENCE: [Position; 3] = [
    Position {
        title: "Assistant Professor",
        organization: "School of Sciences",
        period: "Present",
        duties: &[
            "Assistant Professor and University Research Coordinator",
            "Research guidance, M.Sc. and Ph.D. supervision",
            "Teaching lab in charge, accreditation committee core member",
            "Curriculum delivery, academic planning, mentorship",
        ],
    },
    Position {
        title: "Assistant Professor",
        organization: "Gartner University, Life Sciences",
        period: "2021–2023",
        duties: &[
            "Life Sciences Department faculty",
            "Bridge course speaker and workshop facilitator",
            "Student mentorship and curriculum design",
        ],
    },
    Position {
        title: "Research Fellow",
        organization: "National Agricultural Research Projects",
        period: "2012–2021",
        duties: &[
            "Plant breeding, plant and animal biotechnology projects",
            "Downy mildew and bacterial leaf blight resistance studies",
            "Transcriptome analysis and advanced molecular techniques",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ResearchProject {
    pub title: &'static str,
    pub description: &'static str,
    pub techniques: &'static [&'static str],
}

pub const RESEARCH_PROJECTS: [ResearchProject; 5] = [
    ResearchProject {
        title: "Characterization of Red Rice Genotypes",
        description: "SSR and InDel markers for genetic diversity analysis",
        techniques: &["Molecular Markers", "SSR Analysis", "InDel Mapping"],
    },
    ResearchProject {
        title: "Transcriptome-based Blight Resistance Gene Identification",
        description: "Identification of bacterial leaf blight resistance genes in rice",
        techniques: &["RNA-Seq", "Gene Mining", "Transcriptomics"],
    },
    ResearchProject {
        title: "2-D Proteomics for Sex Chromosome Markers",
        description: "Development of sex chromosome-specific protein markers",
        techniques: &["Proteomics", "SDS-PAGE", "Marker Development"],
    },
    ResearchProject {
        title: "SCAR Marker Development & Real-time PCR",
        description: "Gene mining and quantitative expression analysis",
        techniques: &["SCAR Markers", "qPCR", "Gene Expression"],
    },
    ResearchProject {
        title: "Biofortified Edible Mushroom Cultivation",
        description: "Pilot study targeting micronutrient deficiencies through biofortification",
        techniques: &["Biofortification", "Nutritional Security"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Workshop {
    pub title: &'static str,
    pub organization: &'static str,
    pub role: &'static str,
}

pub const WORKSHOPS: [Workshop; 4] = [
    Workshop {
        title: "Five-Day NGS & Bioinformatics Workshop",
        organization: "Anandvan Agricultural University",
        role: "Workshop Facilitator",
    },
    Workshop {
        title: "Biology Induction Program",
        organization: "Gartner University",
        role: "Guest Speaker",
    },
    Workshop {
        title: "Molecular Biology Techniques Program",
        organization: "State Biotechnology Research Centre",
        role: "Trainer",
    },
    Workshop {
        title: "Career Guidance Session",
        organization: "Regional Media House",
        role: "Guest Speaker",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Publication {
    pub title: &'static str,
    pub journal: &'static str,
    pub year: &'static str,
    pub impact: &'static str,
}

pub const PUBLICATIONS: [Publication; 8] = [
    Publication {
        title: "Transcriptome-wide identification and validation of NBS-LRR genes \
                in cultivated and wild rice species",
        journal: "Genetic Resources and Crop Evolution",
        year: "2020",
        impact: "IF: 2.5",
    },
    Publication {
        title: "Molecular characterization of red rice genotypes using SSR markers",
        journal: "Journal of Genetics and Plant Breeding",
        year: "2019",
        impact: "NAAS: 6.5",
    },
    Publication {
        title: "Identification of candidate genes for bacterial leaf blight \
                resistance in rice",
        journal: "Plant Molecular Biology Reporter",
        year: "2018",
        impact: "IF: 2.1",
    },
    Publication {
        title: "Development of SCAR markers linked to downy mildew resistance in \
                pearl millet",
        journal: "Molecular Breeding",
        year: "2017",
        impact: "IF: 3.2",
    },
    Publication {
        title: "Gene expression analysis of resistance genes in rice using qRT-PCR",
        journal: "Journal of Plant Biochemistry and Biotechnology",
        year: "2017",
        impact: "IF: 1.8",
    },
    Publication {
        title: "Genetic diversity analysis in rice germplasm using InDel markers",
        journal: "Crop Science",
        year: "2016",
        impact: "IF: 2.4",
    },
    Publication {
        title: "Transcriptome analysis reveals candidate genes for stress \
                tolerance in rice",
        journal: "BMC Genomics",
        year: "2015",
        impact: "IF: 3.8",
    },
    Publication {
        title: "Marker-assisted selection for disease resistance in rice breeding \
                programs",
        journal: "Euphytica",
        year: "2014",
        impact: "IF: 2.0",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct AwardEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub venue: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

pub const AWARDS: [AwardEntry; 2] = [
    AwardEntry {
        title: "Young Woman Researcher Award",
        organization: "National Research Forum 2024",
        description: "Outstanding research in plant stress physiology",
        venue: "Chennai",
        date: "March 2024",
        image: crate::assets::AWARD_IMAGES[0],
    },
    AwardEntry {
        title: "Inspirational Educator Award 2025",
        organization: "Women Leaders in Education & Research",
        description: "Recognition for excellence in academic research and leadership",
        venue: "Bengaluru",
        date: "September 2025",
        image: crate::assets::AWARD_IMAGES[1],
    },
];

pub const CORE_SKILLS: [&str; 8] = [
    "DNA Extraction",
    "PCR & Real-time PCR",
    "Gel Electrophoresis",
    "Next-Gen Sequencing",
    "Biochemical Profiling",
    "Molecular Marker Techniques",
    "Transcriptomic Data Analysis",
    "Statistical Modeling",
];

pub const SOFTWARE_SKILLS: [&str; 6] = [
    "SAS",
    "GenAlEx",
    "POPGENE",
    "SPSS",
    "Spreadsheet Analysis",
    "Bioinformatics Tools",
];

pub const COURSES: [&str; 8] = [
    "Molecular Biology",
    "Cell Biology",
    "Biotechnology",
    "Biochemistry",
    "Microbiology",
    "Drug Delivery Systems",
    "Research Methodology",
    "Scientific Writing",
];

pub const TEACHING_PHILOSOPHY: &str =
    "Committed to fostering curiosity, critical thinking, and hands-on research \
     experience in students, emphasizing problem-based learning and real-world \
     applications of molecular biology to prepare the next generation of \
     researchers.";

pub const CONTACT_BLURB: &str =
    "For research collaborations, academic inquiries, or professional \
     opportunities, feel free to reach out.";
pub const CONTACT_EMAIL: &str = "maya.iyer@example.edu";
pub const FOOTER_TEXT: &str = "© 2025 Dr. Maya R. Iyer. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_match_the_counter_inputs() {
        assert_eq!(STATS.len(), 4);
        assert_eq!(STATS[0].target, 11);
        assert_eq!(STATS[0].suffix, "+");
    }

    #[test]
    fn award_images_reference_bundled_paths() {
        for award in AWARDS {
            assert!(crate::assets::AWARD_IMAGES.contains(&award.image));
        }
    }
}

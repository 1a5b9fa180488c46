use eq_types::{Cta, SLIDE_COUNT, SlideContent};

const fn slide(
    number: &'static str,
    tag: &'static str,
    title: [&'static str; 2],
    description: &'static str,
    primary: (&'static str, &'static str),
    secondary: (&'static str, &'static str),
) -> SlideContent {
    SlideContent {
        number,
        tag,
        title,
        description,
        primary: Cta {
            label: primary.0,
            href: primary.1,
        },
        secondary: Cta {
            label: secondary.0,
            href: secondary.1,
        },
    }
}

pub(crate) const PT_BR: [SlideContent; SLIDE_COUNT] = [
    slide(
        "01",
        "EQUIPILATES 2024",
        ["EXCELÊNCIA", "ABSOLUTA"],
        "Equipamentos premium que redefinem<br/>o padrão de qualidade no Pilates",
        ("Conhecer Produtos", "#manifesto"),
        ("Solicitar Orçamento", "#contact"),
    ),
    slide(
        "02",
        "DESIGN & FUNÇÃO",
        ["QUALIDADE", "SUPERIOR"],
        "Fabricação artesanal com tecnologia<br/>de ponta para resultados excepcionais",
        ("Explorar Linha", "#classic"),
        ("Ver Galeria", "#contemporary"),
    ),
    slide(
        "03",
        "20 ANOS DE HISTÓRIA",
        ["CONFIANÇA", "COMPROVADA"],
        "2500+ studios em 3 continentes<br/>escolhem nossa excelência",
        ("Nossa História", "#innovation"),
        ("Fale Conosco", "https://wa.me/5511999999999"),
    ),
    slide(
        "04",
        "INOVAÇÃO CONSTANTE",
        ["TECNOLOGIA", "AVANÇADA"],
        "Equipamentos inteligentes para<br/>resultados superiores e mensuráveis",
        ("Ver Tecnologia", "#contemporary"),
        ("Solicitar Demo", "#contact"),
    ),
];

pub(crate) const EN: [SlideContent; SLIDE_COUNT] = [
    slide(
        "01",
        "EQUIPILATES 2024",
        ["ABSOLUTE", "EXCELLENCE"],
        "Premium equipment that redefines<br/>the quality standard in Pilates",
        ("Discover Products", "#manifesto"),
        ("Request a Quote", "#contact"),
    ),
    slide(
        "02",
        "DESIGN & FUNCTION",
        ["SUPERIOR", "QUALITY"],
        "Handcrafted manufacturing with cutting-edge<br/>technology for exceptional results",
        ("Explore the Line", "#classic"),
        ("View Gallery", "#contemporary"),
    ),
    slide(
        "03",
        "20 YEARS OF HISTORY",
        ["PROVEN", "TRUST"],
        "2500+ studios on 3 continents<br/>choose our excellence",
        ("Our Story", "#innovation"),
        ("Talk to Us", "https://wa.me/5511999999999"),
    ),
    slide(
        "04",
        "CONSTANT INNOVATION",
        ["ADVANCED", "TECHNOLOGY"],
        "Smart equipment for superior<br/>and measurable results",
        ("See the Technology", "#contemporary"),
        ("Request a Demo", "#contact"),
    ),
];

pub(crate) const ES: [SlideContent; SLIDE_COUNT] = [
    slide(
        "01",
        "EQUIPILATES 2024",
        ["EXCELENCIA", "ABSOLUTA"],
        "Equipos premium que redefinen<br/>el estándar de calidad en Pilates",
        ("Conocer Productos", "#manifesto"),
        ("Solicitar Presupuesto", "#contact"),
    ),
    slide(
        "02",
        "DISEÑO Y FUNCIÓN",
        ["CALIDAD", "SUPERIOR"],
        "Fabricación artesanal con tecnología<br/>de punta para resultados excepcionales",
        ("Explorar Línea", "#classic"),
        ("Ver Galería", "#contemporary"),
    ),
    slide(
        "03",
        "20 AÑOS DE HISTORIA",
        ["CONFIANZA", "COMPROBADA"],
        "Más de 2500 estudios en 3 continentes<br/>eligen nuestra excelencia",
        ("Nuestra Historia", "#innovation"),
        ("Contáctanos", "https://wa.me/5511999999999"),
    ),
    slide(
        "04",
        "INNOVACIÓN CONSTANTE",
        ["TECNOLOGÍA", "AVANZADA"],
        "Equipos inteligentes para<br/>resultados superiores y medibles",
        ("Ver Tecnología", "#contemporary"),
        ("Solicitar Demo", "#contact"),
    ),
];

pub(crate) const DE: [SlideContent; SLIDE_COUNT] = [
    slide(
        "01",
        "EQUIPILATES 2024",
        ["ABSOLUTE", "EXZELLENZ"],
        "Premium-Geräte, die den Qualitätsstandard<br/>im Pilates neu definieren",
        ("Produkte entdecken", "#manifesto"),
        ("Angebot anfordern", "#contact"),
    ),
    slide(
        "02",
        "DESIGN & FUNKTION",
        ["HÖCHSTE", "QUALITÄT"],
        "Handwerkliche Fertigung mit modernster<br/>Technik für außergewöhnliche Ergebnisse",
        ("Linie erkunden", "#classic"),
        ("Galerie ansehen", "#contemporary"),
    ),
    slide(
        "03",
        "20 JAHRE GESCHICHTE",
        ["BEWÄHRTES", "VERTRAUEN"],
        "Über 2500 Studios auf 3 Kontinenten<br/>setzen auf unsere Qualität",
        ("Unsere Geschichte", "#innovation"),
        ("Kontakt aufnehmen", "https://wa.me/5511999999999"),
    ),
    slide(
        "04",
        "STÄNDIGE INNOVATION",
        ["FORTSCHRITTLICHE", "TECHNIK"],
        "Intelligente Geräte für bessere<br/>und messbare Ergebnisse",
        ("Technik ansehen", "#contemporary"),
        ("Demo anfordern", "#contact"),
    ),
];

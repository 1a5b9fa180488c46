//! Translated page strings, one flat table per language.
//!
//! Every table carries the same keys; `tests::dictionaries_share_keys`
//! keeps them aligned.

pub(crate) const PT_BR: &[(&str, &str)] = &[
    ("nav.home", "Início"),
    ("nav.manifesto", "Manifesto"),
    ("nav.classic", "Linha Clássica"),
    ("nav.contemporary", "Linha Contemporânea"),
    ("nav.innovation", "Inovação"),
    ("nav.wizard", "Monte seu Studio"),
    ("nav.contact", "Contato"),
    ("lang.label", "Idioma"),
    ("hero.prev", "Slide anterior"),
    ("hero.next", "Próximo slide"),
    ("hero.scroll", "Role para explorar"),
    ("manifesto.title", "Movimento é precisão"),
    ("manifesto.body", "Cada equipamento nasce do encontro entre engenharia, marcenaria e o método Pilates."),
    ("stats.studios", "studios equipados"),
    ("stats.years", "anos de história"),
    ("stats.continents", "continentes"),
    ("stats.products", "modelos no catálogo"),
    ("wizard.title", "Monte o studio ideal"),
    ("wizard.subtitle", "Responda três perguntas e receba uma sugestão de kit."),
    ("wizard.q1.label", "Qual o tamanho do seu espaço?"),
    ("wizard.q1.opt1", "Até 15m²"),
    ("wizard.q1.opt2", "15–25m²"),
    ("wizard.q1.opt3", "25–40m²"),
    ("wizard.q1.opt4", "Acima de 40m²"),
    ("wizard.q2.label", "Qual o seu objetivo?"),
    ("wizard.q2.opt1", "Abrir meu primeiro studio"),
    ("wizard.q2.opt2", "Ampliar capacidade de alunos"),
    ("wizard.q2.opt3", "Atualizar para linha contemporânea"),
    ("wizard.q2.opt4", "Reabilitação e fisioterapia"),
    ("wizard.q3.label", "Quais equipamentos você já tem?"),
    ("wizard.q3.placeholder", "Ex.: 1 Reformer, 1 Chair"),
    ("wizard.submit", "Receber recomendação no WhatsApp"),
    ("wizard.email", "Prefiro receber por e-mail"),
    ("wizard.name.placeholder", "Seu nome"),
    ("wizard.email.placeholder", "Seu e-mail"),
    ("wizard.result.title", "Nossa recomendação"),
    ("wizard.result.kit", "Kit sugerido"),
    ("wizard.result.focus", "Foco"),
    ("wizard.result.note", "Observação"),
    ("contact.title", "Fale com um especialista"),
    ("contact.name", "Nome"),
    ("contact.email", "E-mail"),
    ("contact.message", "Mensagem"),
    ("contact.message.placeholder", "Conte-nos sobre o seu projeto"),
    ("contact.submit", "Enviar"),
    ("contact.sending", "ENVIANDO..."),
    ("contact.sent", "ENVIADO ✓"),
    ("footer.tagline", "Equipamentos de Pilates feitos para durar."),
    ("footer.rights", "Todos os direitos reservados."),
];

pub(crate) const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.manifesto", "Manifesto"),
    ("nav.classic", "Classic Line"),
    ("nav.contemporary", "Contemporary Line"),
    ("nav.innovation", "Innovation"),
    ("nav.wizard", "Build your Studio"),
    ("nav.contact", "Contact"),
    ("lang.label", "Language"),
    ("hero.prev", "Previous slide"),
    ("hero.next", "Next slide"),
    ("hero.scroll", "Scroll to explore"),
    ("manifesto.title", "Movement is precision"),
    ("manifesto.body", "Every apparatus is born where engineering, woodworking and the Pilates method meet."),
    ("stats.studios", "studios equipped"),
    ("stats.years", "years of history"),
    ("stats.continents", "continents"),
    ("stats.products", "models in the catalog"),
    ("wizard.title", "Build the ideal studio"),
    ("wizard.subtitle", "Answer three questions and get a suggested kit."),
    ("wizard.q1.label", "How big is your space?"),
    ("wizard.q1.opt1", "Up to 15m²"),
    ("wizard.q1.opt2", "15–25m²"),
    ("wizard.q1.opt3", "25–40m²"),
    ("wizard.q1.opt4", "Over 40m²"),
    ("wizard.q2.label", "What is your goal?"),
    ("wizard.q2.opt1", "Open my first studio"),
    ("wizard.q2.opt2", "Increase student capacity"),
    ("wizard.q2.opt3", "Upgrade to the contemporary line"),
    ("wizard.q2.opt4", "Rehabilitation and physiotherapy"),
    ("wizard.q3.label", "Which equipment do you already own?"),
    ("wizard.q3.placeholder", "e.g. 1 Reformer, 1 Chair"),
    ("wizard.submit", "Get my recommendation on WhatsApp"),
    ("wizard.email", "I'd rather get it by e-mail"),
    ("wizard.name.placeholder", "Your name"),
    ("wizard.email.placeholder", "Your e-mail"),
    ("wizard.result.title", "Our recommendation"),
    ("wizard.result.kit", "Suggested kit"),
    ("wizard.result.focus", "Focus"),
    ("wizard.result.note", "Note"),
    ("contact.title", "Talk to a specialist"),
    ("contact.name", "Name"),
    ("contact.email", "E-mail"),
    ("contact.message", "Message"),
    ("contact.message.placeholder", "Tell us about your project"),
    ("contact.submit", "Send"),
    ("contact.sending", "SENDING..."),
    ("contact.sent", "SENT ✓"),
    ("footer.tagline", "Pilates equipment built to last."),
    ("footer.rights", "All rights reserved."),
];

pub(crate) const ES: &[(&str, &str)] = &[
    ("nav.home", "Inicio"),
    ("nav.manifesto", "Manifiesto"),
    ("nav.classic", "Línea Clásica"),
    ("nav.contemporary", "Línea Contemporánea"),
    ("nav.innovation", "Innovación"),
    ("nav.wizard", "Arma tu Estudio"),
    ("nav.contact", "Contacto"),
    ("lang.label", "Idioma"),
    ("hero.prev", "Diapositiva anterior"),
    ("hero.next", "Siguiente diapositiva"),
    ("hero.scroll", "Desliza para explorar"),
    ("manifesto.title", "El movimiento es precisión"),
    ("manifesto.body", "Cada equipo nace del encuentro entre ingeniería, carpintería y el método Pilates."),
    ("stats.studios", "estudios equipados"),
    ("stats.years", "años de historia"),
    ("stats.continents", "continentes"),
    ("stats.products", "modelos en el catálogo"),
    ("wizard.title", "Arma el estudio ideal"),
    ("wizard.subtitle", "Responde tres preguntas y recibe una sugerencia de kit."),
    ("wizard.q1.label", "¿Qué tamaño tiene tu espacio?"),
    ("wizard.q1.opt1", "Hasta 15m²"),
    ("wizard.q1.opt2", "15–25m²"),
    ("wizard.q1.opt3", "25–40m²"),
    ("wizard.q1.opt4", "Más de 40m²"),
    ("wizard.q2.label", "¿Cuál es tu objetivo?"),
    ("wizard.q2.opt1", "Abrir mi primer estudio"),
    ("wizard.q2.opt2", "Ampliar la capacidad de alumnos"),
    ("wizard.q2.opt3", "Actualizar a la línea contemporánea"),
    ("wizard.q2.opt4", "Rehabilitación y fisioterapia"),
    ("wizard.q3.label", "¿Qué equipos tienes hoy?"),
    ("wizard.q3.placeholder", "Ej.: 1 Reformer, 1 Chair"),
    ("wizard.submit", "Recibir recomendación por WhatsApp"),
    ("wizard.email", "Prefiero recibirla por e-mail"),
    ("wizard.name.placeholder", "Tu nombre"),
    ("wizard.email.placeholder", "Tu e-mail"),
    ("wizard.result.title", "Nuestra recomendación"),
    ("wizard.result.kit", "Kit sugerido"),
    ("wizard.result.focus", "Enfoque"),
    ("wizard.result.note", "Observación"),
    ("contact.title", "Habla con un especialista"),
    ("contact.name", "Nombre"),
    ("contact.email", "E-mail"),
    ("contact.message", "Mensaje"),
    ("contact.message.placeholder", "Cuéntanos sobre tu proyecto"),
    ("contact.submit", "Enviar"),
    ("contact.sending", "ENVIANDO..."),
    ("contact.sent", "ENVIADO ✓"),
    ("footer.tagline", "Equipos de Pilates hechos para durar."),
    ("footer.rights", "Todos los derechos reservados."),
];

pub(crate) const DE: &[(&str, &str)] = &[
    ("nav.home", "Start"),
    ("nav.manifesto", "Manifest"),
    ("nav.classic", "Klassische Linie"),
    ("nav.contemporary", "Zeitgenössische Linie"),
    ("nav.innovation", "Innovation"),
    ("nav.wizard", "Studio planen"),
    ("nav.contact", "Kontakt"),
    ("lang.label", "Sprache"),
    ("hero.prev", "Vorherige Folie"),
    ("hero.next", "Nächste Folie"),
    ("hero.scroll", "Scrollen zum Entdecken"),
    ("manifesto.title", "Bewegung ist Präzision"),
    ("manifesto.body", "Jedes Gerät entsteht dort, wo Ingenieurskunst, Tischlerhandwerk und die Pilates-Methode zusammenkommen."),
    ("stats.studios", "ausgestattete Studios"),
    ("stats.years", "Jahre Geschichte"),
    ("stats.continents", "Kontinente"),
    ("stats.products", "Modelle im Katalog"),
    ("wizard.title", "Das ideale Studio planen"),
    ("wizard.subtitle", "Beantworten Sie drei Fragen und erhalten Sie einen Ausstattungsvorschlag."),
    ("wizard.q1.label", "Wie groß ist Ihr Raum?"),
    ("wizard.q1.opt1", "Bis 15m²"),
    ("wizard.q1.opt2", "15–25m²"),
    ("wizard.q1.opt3", "25–40m²"),
    ("wizard.q1.opt4", "Über 40m²"),
    ("wizard.q2.label", "Was ist Ihr Ziel?"),
    ("wizard.q2.opt1", "Mein erstes Studio eröffnen"),
    ("wizard.q2.opt2", "Mehr Kapazität für Teilnehmende"),
    ("wizard.q2.opt3", "Auf die zeitgenössische Linie umsteigen"),
    ("wizard.q2.opt4", "Rehabilitation und Physiotherapie"),
    ("wizard.q3.label", "Welche Geräte besitzen Sie bereits?"),
    ("wizard.q3.placeholder", "z. B. 1 Reformer, 1 Chair"),
    ("wizard.submit", "Empfehlung per WhatsApp erhalten"),
    ("wizard.email", "Lieber per E-Mail"),
    ("wizard.name.placeholder", "Ihr Name"),
    ("wizard.email.placeholder", "Ihre E-Mail"),
    ("wizard.result.title", "Unsere Empfehlung"),
    ("wizard.result.kit", "Empfohlenes Set"),
    ("wizard.result.focus", "Schwerpunkt"),
    ("wizard.result.note", "Hinweis"),
    ("contact.title", "Sprechen Sie mit uns"),
    ("contact.name", "Name"),
    ("contact.email", "E-Mail"),
    ("contact.message", "Nachricht"),
    ("contact.message.placeholder", "Erzählen Sie uns von Ihrem Projekt"),
    ("contact.submit", "Senden"),
    ("contact.sending", "WIRD GESENDET..."),
    ("contact.sent", "GESENDET ✓"),
    ("footer.tagline", "Pilates-Geräte, gebaut für die Ewigkeit."),
    ("footer.rights", "Alle Rechte vorbehalten."),
];

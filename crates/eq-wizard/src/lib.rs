//! Studio recommendation wizard.
//!
//! `recommend` is pure. The message and link builders produce the text and
//! URLs the page hands to the messaging app or the mail composer; nothing
//! here performs I/O.

mod links;

pub use links::{ContactDetails, email_body, mailto_link, messaging_link};

use thiserror::Error;
use tracing::debug;

pub const NOT_PROVIDED: &str = "não informado";

const DEFAULT_KIT: [&str; 3] = ["Reformer", "Chair", "Barrel"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceSize {
    UpTo15,
    From15To25,
    From25To40,
    Over40,
}

impl SpaceSize {
    pub const ALL: [SpaceSize; 4] = [
        SpaceSize::UpTo15,
        SpaceSize::From15To25,
        SpaceSize::From25To40,
        SpaceSize::Over40,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo15 => "Até 15m²",
            Self::From15To25 => "15–25m²",
            Self::From25To40 => "25–40m²",
            Self::Over40 => "Acima de 40m²",
        }
    }

    /// Match a bucket label. Hyphen and en dash are interchangeable and
    /// case and surrounding whitespace are ignored.
    pub fn from_label(raw: &str) -> Option<Self> {
        let wanted = normalize_label(raw);
        Self::ALL
            .into_iter()
            .find(|size| normalize_label(size.label()) == wanted)
    }

    pub fn kit(self) -> &'static [&'static str] {
        match self {
            Self::UpTo15 => &["Reformer compacto", "Chair", "Acessórios (bola, anel, faixas)"],
            Self::From15To25 => &["Reformer", "Chair", "Ladder Barrel"],
            Self::From25To40 => &["Reformer", "Cadillac (ou Tower)", "Chair"],
            Self::Over40 => &[
                "Reformer (2 unidades)",
                "Cadillac",
                "Chair",
                "Ladder Barrel",
                "Spine Corrector",
            ],
        }
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['–', '—'], "-").replace(' ', "")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Rehabilitation,
    MaintenanceReduction,
    ContemporaryLine,
    Capacity,
}

impl Focus {
    /// Rules in priority order; the first rule whose keyword appears in the
    /// lowercased goal wins.
    const RULES: [(Focus, &'static [&'static str]); 4] = [
        (Focus::Rehabilitation, &["reabilit", "fisio", "rehab"]),
        (Focus::MaintenanceReduction, &["manuten", "maintenance"]),
        (Focus::ContemporaryLine, &["contempor"]),
        (Focus::Capacity, &["capacidade", "ampliar", "alunos", "capacity"]),
    ];

    pub fn for_goal(goal: &str) -> Option<Self> {
        let goal = goal.to_lowercase();
        Self::RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| goal.contains(k)))
            .map(|(focus, _)| *focus)
    }

    pub fn advice(self) -> &'static str {
        match self {
            Self::Rehabilitation => {
                "Priorize aparelhos com ajustes finos de molas e acessórios terapêuticos."
            }
            Self::MaintenanceReduction => {
                "Estruturas em alumínio e estofados de alta resistência reduzem a manutenção."
            }
            Self::ContemporaryLine => {
                "Linha contemporânea: design atual, acabamento premium e regulagens rápidas."
            }
            Self::Capacity => {
                "Padronize os Reformers para aulas em grupo e otimize a circulação do espaço."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub kit: Vec<String>,
    pub focus: String,
    pub note: String,
}

pub fn recommend(space: &str, goal: &str, current_equipment: &str) -> Recommendation {
    let kit: Vec<String> = match SpaceSize::from_label(space) {
        Some(size) => size.kit().iter().map(|item| (*item).to_owned()).collect(),
        None => {
            debug!("unknown space bucket {:?}, using default kit", space);
            DEFAULT_KIT.iter().map(|item| (*item).to_owned()).collect()
        }
    };
    let focus = Focus::for_goal(goal)
        .map(|f| f.advice().to_owned())
        .unwrap_or_default();
    let equipment = current_equipment.trim();
    let note = format!(
        "Equipamento atual: {}",
        if equipment.is_empty() { NOT_PROVIDED } else { equipment }
    );
    Recommendation { kit, focus, note }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("space size is required")]
    MissingSpace,
    #[error("goal is required")]
    MissingGoal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardInput {
    pub space: String,
    pub goal: String,
    pub current_equipment: String,
}

/// Input that passed validation; the only way to build a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    space: String,
    goal: String,
    current_equipment: String,
}

impl ValidatedInput {
    pub fn space(&self) -> &str {
        &self.space
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn current_equipment(&self) -> &str {
        &self.current_equipment
    }

    pub fn recommend(&self) -> Recommendation {
        recommend(&self.space, &self.goal, &self.current_equipment)
    }
}

impl WizardInput {
    pub fn validate(&self) -> Result<ValidatedInput, WizardError> {
        let space = self.space.trim();
        let goal = self.goal.trim();
        if space.is_empty() {
            return Err(WizardError::MissingSpace);
        }
        if goal.is_empty() {
            return Err(WizardError::MissingGoal);
        }
        Ok(ValidatedInput {
            space: space.to_owned(),
            goal: goal.to_owned(),
            current_equipment: self.current_equipment.trim().to_owned(),
        })
    }
}

pub fn compose_message(input: &ValidatedInput, rec: &Recommendation) -> String {
    let equipment = if input.current_equipment.is_empty() {
        NOT_PROVIDED
    } else {
        input.current_equipment.as_str()
    };
    let mut lines = vec![
        "Olá! Gostaria de uma recomendação de equipamentos.".to_owned(),
        String::new(),
        format!("Espaço: {}", input.space),
        format!("Objetivo: {}", input.goal),
        format!("Equipamentos atuais: {equipment}"),
        String::new(),
        "Kit recomendado:".to_owned(),
    ];
    lines.extend(rec.kit.iter().map(|item| format!("- {item}")));
    if !rec.focus.is_empty() {
        lines.push(String::new());
        lines.push(format!("Foco: {}", rec.focus));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_size_contemporary_upgrade() {
        let rec = recommend("25–40m²", "Atualizar para linha contemporânea", "");
        assert_eq!(rec.kit, vec!["Reformer", "Cadillac (ou Tower)", "Chair"]);
        assert_eq!(rec.focus, Focus::ContemporaryLine.advice());
        assert!(!rec.focus.is_empty());
        assert_eq!(rec.note, "Equipamento atual: não informado");
    }

    #[test]
    fn unknown_space_gets_default_kit() {
        let rec = recommend("garagem", "qualquer coisa", "2 Reformers");
        assert_eq!(rec.kit, vec!["Reformer", "Chair", "Barrel"]);
        assert_eq!(rec.focus, "");
        assert_eq!(rec.note, "Equipamento atual: 2 Reformers");
    }

    #[test]
    fn space_labels_tolerate_dash_and_case() {
        assert_eq!(SpaceSize::from_label("25-40m²"), Some(SpaceSize::From25To40));
        assert_eq!(SpaceSize::from_label(" ACIMA DE 40M² "), Some(SpaceSize::Over40));
        assert_eq!(SpaceSize::from_label("até 15m²"), Some(SpaceSize::UpTo15));
        assert_eq!(SpaceSize::from_label("40m²"), None);
    }

    #[test]
    fn every_bucket_has_a_kit() {
        for size in SpaceSize::ALL {
            assert!(size.kit().len() >= 3, "{:?}", size);
            assert_eq!(SpaceSize::from_label(size.label()), Some(size));
        }
    }

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(
            Focus::for_goal("Reabilitação com menos manutenção"),
            Some(Focus::Rehabilitation)
        );
        assert_eq!(
            Focus::for_goal("Ampliar capacidade com linha contemporânea"),
            Some(Focus::ContemporaryLine)
        );
        assert_eq!(Focus::for_goal("Abrir meu primeiro studio"), None);
    }

    #[test]
    fn note_trims_equipment() {
        assert_eq!(recommend("15–25m²", "x", "   ").note, "Equipamento atual: não informado");
        assert_eq!(recommend("15–25m²", "x", "  1 Chair \n").note, "Equipamento atual: 1 Chair");
    }

    #[test]
    fn validation_requires_space_and_goal() {
        let empty_space = WizardInput {
            space: " ".into(),
            goal: "Ampliar capacidade de alunos".into(),
            ..Default::default()
        };
        assert_eq!(empty_space.validate(), Err(WizardError::MissingSpace));

        let empty_goal = WizardInput {
            space: "Até 15m²".into(),
            ..Default::default()
        };
        assert_eq!(empty_goal.validate(), Err(WizardError::MissingGoal));
    }

    #[test]
    fn message_lists_answers_and_kit() {
        let input = WizardInput {
            space: "Acima de 40m²".into(),
            goal: "Ampliar capacidade de alunos".into(),
            current_equipment: "".into(),
        }
        .validate()
        .unwrap();
        let rec = input.recommend();
        let message = compose_message(&input, &rec);

        assert!(message.contains("Espaço: Acima de 40m²"));
        assert!(message.contains("Objetivo: Ampliar capacidade de alunos"));
        assert!(message.contains("Equipamentos atuais: não informado"));
        assert!(message.contains("- Spine Corrector"));
        assert!(message.ends_with(Focus::Capacity.advice()));
    }

    #[test]
    fn message_omits_empty_focus() {
        let input = WizardInput {
            space: "Até 15m²".into(),
            goal: "Abrir meu primeiro studio".into(),
            current_equipment: "nenhum".into(),
        }
        .validate()
        .unwrap();
        let message = compose_message(&input, &input.recommend());
        assert!(!message.contains("Foco:"));
        assert!(message.contains("Equipamentos atuais: nenhum"));
    }
}

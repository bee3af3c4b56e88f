//! Question text table and answer legends for the 54-item inventory.

pub mod scales;

use crate::types::scoring::QuestionId;

pub const QUESTION_COUNT: usize = 54;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legend {
    /// Nunca .. Sempre
    Frequency,
    /// Nenhuma .. A maioria
    Quantity,
}

impl Legend {
    pub const fn for_question(id: QuestionId) -> Legend {
        match id {
            17..=40 => Legend::Quantity,
            _ => Legend::Frequency,
        }
    }

    /// Labels for answer values 1 through 6.
    pub fn options(self) -> [&'static str; 6] {
        match self {
            Legend::Frequency => [
                "Nunca",
                "Raramente",
                "Ocasionalmente",
                "Algumas vezes",
                "Com frequência",
                "Sempre",
            ],
            Legend::Quantity => [
                "Nenhuma",
                "Uma ou duas",
                "Poucas",
                "Algumas",
                "Muitas",
                "A maioria",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub legend: Legend,
}

const fn question(id: QuestionId, text: &'static str) -> Question {
    Question {
        id,
        text,
        legend: Legend::for_question(id),
    }
}

// Several texts repeat under different ids (2/18, 14/26, 28/42, ...). They
// are distinct items of the instrument.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    question(1, "Eu tento estar com as pessoas"),
    question(2, "Eu deixo as pessoas decidirem o que elas querem fazer"),
    question(3, "Eu me junto a grupos sociais"),
    question(4, "Eu tento ter relacionamentos próximos com as pessoas"),
    question(5, "Eu tento me filiar a organizações sociais"),
    question(6, "Eu deixo outras pessoas exercerem muita influência sobre mim"),
    question(7, "Eu tento estar incluído em atividades sociais informais"),
    question(8, "Eu tento ter relações pessoais com as pessoas"),
    question(9, "Eu tento incluir outras pessoas nos meus planos"),
    question(10, "Eu deixo outras pessoas controlarem as minhas ações"),
    question(11, "Eu tento ter pessoas à minha volta"),
    question(12, "Eu tento me envolver pessoalmente com as pessoas"),
    question(13, "Quando as pessoas estão envolvidas em alguma atividade eu tento me unir a elas"),
    question(14, "Eu sou facilmente guiado por outras pessoas"),
    question(15, "Eu tento não estar sozinho"),
    question(16, "Eu tento participar de atividades em grupos"),
    question(17, "Eu tento ser amigável com as pessoas"),
    question(18, "Eu deixo as pessoas decidirem o que elas querem fazer"),
    question(19, "Os meus relacionamentos pessoais são frios e distantes"),
    question(20, "Eu permito que outras pessoas executem suas responsabilidades"),
    question(21, "Eu tento ter relacionamentos íntimos com as pessoas"),
    question(22, "Eu deixo as pessoas influenciarem muito as minhas ações"),
    question(23, "Eu tento chegar próximo das pessoas"),
    question(24, "Eu permito que as pessoas controlem as minhas ações"),
    question(25, "Eu ajo de forma fria e distante com as pessoas"),
    question(26, "Eu sou facilmente guiado por outras pessoas"),
    question(27, "Eu tento ter relações próximas e pessoais com outras pessoas"),
    question(28, "Eu gosto que as pessoas me convidem para suas atividades"),
    question(29, "Eu gosto que as pessoas ajam próximas e pessoalmente comigo"),
    question(30, "Eu tento influenciar fortemente as ações de outras pessoas"),
    question(31, "Eu gosto que as pessoas me convidem para me juntar às suas atividades"),
    question(32, "Eu gosto que as pessoas ajam objetivamente comigo"),
    question(33, "Eu tento tomar a liderança quando estou com as pessoas"),
    question(34, "Eu gosto que as pessoas me incluam em suas atividades"),
    question(35, "Eu gosto que as pessoas ajam frias e distantes comigo"),
    question(36, "Eu tento fazer com que as pessoas façam as coisas da maneira que eu acho que devem ser feitas"),
    question(37, "Eu gosto que as pessoas me perguntem se quero participar de suas discussões"),
    question(38, "Eu gosto que as pessoas ajam amigavelmente comigo"),
    question(39, "Eu gosto que as pessoas me convidem para participar em suas atividades"),
    question(40, "Eu gosto que as pessoas ajam distantes comigo"),
    question(41, "Eu tento ser dominante quando estou com as pessoas"),
    question(42, "Eu gosto que as pessoas me convidem para suas atividades"),
    question(43, "Eu gosto que as pessoas ajam objetivamente comigo"),
    question(44, "Eu tento fazer com que as pessoas façam as coisas que eu gosto"),
    question(45, "Eu gosto que as pessoas me convidem para me juntar às suas atividades"),
    question(46, "Eu gosto que as pessoas ajam frias e distantes para comigo"),
    question(47, "Eu tento influenciar fortemente as ações das pessoas"),
    question(48, "Eu gosto que as pessoas me incluam em suas atividades"),
    question(49, "Eu gosto que as pessoas ajam intimamente e pessoalmente comigo"),
    question(50, "Eu tento assumir a liderança quando estou com outras pessoas"),
    question(51, "Eu gosto que as pessoas me convidem para participar em suas atividades"),
    question(52, "Eu gosto que as pessoas ajam distantes para comigo"),
    question(53, "Eu tento que as pessoas façam as coisas da maneira que eu gosto"),
    question(54, "Eu assumo a liderança quando estou com outras pessoas"),
];

pub fn question_by_id(id: QuestionId) -> Option<&'static Question> {
    let index = usize::from(id).checked_sub(1)?;
    QUESTIONS.get(index)
}

pub fn question_ids() -> impl Iterator<Item = QuestionId> {
    QUESTIONS.iter().map(|question| question.id)
}

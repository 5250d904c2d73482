pub mod choices;
pub mod exam_versions;
pub mod licence_categories;
pub mod licence_types;
pub mod question_categories;
pub mod questions;

pub use choices::Entity as Choices;
pub use choices::Model as Choice;
pub use exam_versions::Entity as ExamVersions;
pub use exam_versions::Model as ExamVersion;
pub use licence_categories::Entity as LicenceCategories;
pub use licence_categories::Model as LicenceCategory;
pub use licence_types::Entity as LicenceTypes;
pub use licence_types::Model as LicenceType;
pub use question_categories::Entity as QuestionCategories;
pub use question_categories::Model as QuestionCategory;
pub use questions::Entity as Questions;
pub use questions::Model as Question;

/// Built-in conversation starters every session begins with.
pub const SEED_QUESTIONS: &[&str] = &[
    "What is a memory from childhood that still makes you smile?",
    "What is something you changed your mind about in the last few years?",
    "When do you feel most like yourself?",
    "What is a small thing that instantly improves your day?",
    "What do you think people misunderstand about you the most?",
    "What is a risk you are glad you took?",
    "What would you do with a free year and no obligations?",
    "Who has shaped the way you see the world, and how?",
    "What is something you are quietly proud of?",
    "What is a belief you hold that most people around you do not?",
    "What do you wish you had known at eighteen?",
    "What kind of day would you repeat over and over if you could?",
    "What is a fear you have outgrown?",
    "How do you think your friends would describe you in three words?",
    "What is a place that feels like home that is not your house?",
    "What is the best piece of advice you ignored?",
    "What is something you are still trying to forgive yourself for?",
    "What song takes you straight back to a specific moment?",
    "What does a good friendship need that most people forget?",
    "What is a question you wish people asked you more often?",
    "When was the last time you surprised yourself?",
    "What is a tradition you want to keep alive?",
    "What is something that scares you but that you want to try anyway?",
    "What would your younger self think of who you are today?",
    "What has been the most meaningful compliment you have received?",
];

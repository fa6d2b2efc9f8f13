//! The built-in vocabulary, in display order.
//!
//! Entries are only ever appended: the daily index is taken modulo this
//! list's length, so reordering changes which word past dates resolve to.

use crate::domain::{Category, Quote, WordEntry};

pub(crate) static WORDS: &[WordEntry] = &[
    // --- General vocabulary ---
    WordEntry {
        text: "Serendipity",
        pronunciation: "/ˌserənˈdɪpɪti/",
        part_of_speech: "noun",
        definition: "The occurrence of events by chance in a happy or beneficial way; a fortunate accident that leads to unexpected discovery.",
        example: "It was pure serendipity that she found her dream job while getting coffee at a café.",
        etymology: "Coined by Horace Walpole in 1754, from the Persian fairy tale 'The Three Princes of Serendip' whose heroes made discoveries by accident.",
        category: Category::General,
        quote: Some(Quote {
            text: "Serendipity is the way to make discoveries, by accident but also by sagacity, of things one is not in quest of.",
            book_title: "Letters",
            author: "Horace Walpole",
        }),
    },
    WordEntry {
        text: "Resilient",
        pronunciation: "/rɪˈzɪliənt/",
        part_of_speech: "adjective",
        definition: "Able to recover quickly from difficulties; having the capacity to spring back into shape after being bent or stretched.",
        example: "Despite facing numerous setbacks, she remained resilient and eventually achieved her goals.",
        etymology: "From Latin resilire, meaning 'to leap back,' from re- (back) + salire (to jump).",
        category: Category::General,
        quote: Some(Quote {
            text: "She was resilient in ways that defied logic, bending but never breaking under the weight of the world.",
            book_title: "Educated",
            author: "Tara Westover",
        }),
    },
    WordEntry {
        text: "Nostalgia",
        pronunciation: "/nɒˈstældʒə/",
        part_of_speech: "noun",
        definition: "A sentimental longing for the past; a bittersweet affection for a period, place, or experience from one's memory.",
        example: "The smell of cinnamon cookies filled him with nostalgia for childhood holidays.",
        etymology: "From Greek nostos (homecoming) + algos (pain), originally coined as a medical term for homesickness in 1688.",
        category: Category::General,
        quote: Some(Quote {
            text: "Nostalgia is a file that removes the rough edges from the good old days.",
            book_title: "The Summing Up",
            author: "W. Somerset Maugham",
        }),
    },
    WordEntry {
        text: "Wanderlust",
        pronunciation: "/ˈwɒndərlʌst/",
        part_of_speech: "noun",
        definition: "A strong, innate desire to travel and explore the world; an irresistible urge to wander.",
        example: "Her wanderlust led her to quit her office job and backpack through South America.",
        etymology: "From German Wanderlust, combining wandern (to wander) + Lust (desire), adopted into English in the early 20th century.",
        category: Category::General,
        quote: Some(Quote {
            text: "A deep wanderlust had taken hold of her, pulling her toward horizons she had only dreamed of.",
            book_title: "The Alchemist",
            author: "Paulo Coelho",
        }),
    },
    WordEntry {
        text: "Enigma",
        pronunciation: "/ɪˈnɪɡmə/",
        part_of_speech: "noun",
        definition: "A person or thing that is mysterious, puzzling, or difficult to understand.",
        example: "Despite years of friendship, he remained an enigma—always surprising and never predictable.",
        etymology: "From Greek ainigma, from ainissesthai (to speak in riddles), from ainos (fable).",
        category: Category::General,
        quote: Some(Quote {
            text: "Russia is a riddle wrapped in a mystery inside an enigma.",
            book_title: "The Gathering Storm",
            author: "Winston Churchill",
        }),
    },
    WordEntry {
        text: "Eloquent",
        pronunciation: "/ˈeləkwənt/",
        part_of_speech: "adjective",
        definition: "Fluent, persuasive, and expressive in speaking or writing; able to convey meaning beautifully.",
        example: "Her eloquent speech moved the audience to tears and standing ovations.",
        etymology: "From Latin eloquens, from eloqui (to speak out), combining e- (out) + loqui (to speak).",
        category: Category::General,
        quote: Some(Quote {
            text: "Eloquence is the power to translate a truth into language perfectly intelligible to the person to whom you speak.",
            book_title: "Letters and Social Aims",
            author: "Ralph Waldo Emerson",
        }),
    },
    // --- Academic ---
    WordEntry {
        text: "Paradigm",
        pronunciation: "/ˈpærəˌdaɪm/",
        part_of_speech: "noun",
        definition: "A typical example or pattern of something; a model or framework for understanding.",
        example: "The discovery led to a paradigm shift in how scientists understood cellular biology.",
        etymology: "From Greek paradeigma, from paradeiknynai (to show side by side), from para- (beside) + deiknynai (to show).",
        category: Category::Academic,
        quote: Some(Quote {
            text: "Normal science does not aim at novelties of fact or theory and, when successful, finds none. New and unsuspected phenomena are, however, repeatedly uncovered by scientific research, and radical new theories have again and again been invented by scientists. History even suggests that the scientific enterprise has developed a uniquely powerful technique for producing surprises of this sort. If this characteristic of science is to be reconciled with what has already been said, then research under a paradigm must be a particularly effective way of inducing paradigm change.",
            book_title: "The Structure of Scientific Revolutions",
            author: "Thomas S. Kuhn",
        }),
    },
    WordEntry {
        text: "Empirical",
        pronunciation: "/ɪmˈpɪrɪkəl/",
        part_of_speech: "adjective",
        definition: "Based on observation or experience rather than theory or pure logic; verifiable by observation.",
        example: "The researchers gathered empirical evidence through controlled laboratory experiments.",
        etymology: "From Greek empeirikos (experienced), from empeiria (experience), from en- (in) + peira (trial).",
        category: Category::Academic,
        quote: Some(Quote {
            text: "All our knowledge begins with the senses, proceeds then to the understanding, and ends with reason. There is nothing higher than reason. But all knowledge that is empirical in origin must be tested against experience.",
            book_title: "Critique of Pure Reason",
            author: "Immanuel Kant",
        }),
    },
    WordEntry {
        text: "Synthesis",
        pronunciation: "/ˈsɪnθəsɪs/",
        part_of_speech: "noun",
        definition: "The combination of ideas to form a theory or system; the production of a substance from simpler materials.",
        example: "Her thesis presented a synthesis of Eastern and Western philosophical traditions.",
        etymology: "From Greek synthesis, from syntithenai (to put together), from syn- (together) + tithenai (to place).",
        category: Category::Academic,
        quote: Some(Quote {
            text: "The thesis and antithesis together produce a synthesis, which in turn becomes a new thesis that generates its own antithesis.",
            book_title: "The Phenomenology of Spirit",
            author: "Georg Wilhelm Friedrich Hegel",
        }),
    },
    WordEntry {
        text: "Juxtaposition",
        pronunciation: "/ˌdʒʌkstəpəˈzɪʃən/",
        part_of_speech: "noun",
        definition: "The act of placing two things close together for contrasting effect; side-by-side comparison.",
        example: "The artist's juxtaposition of wealth and poverty made a powerful social statement.",
        etymology: "From Latin juxta (near) + French position, coined in the mid-17th century.",
        category: Category::Academic,
        quote: Some(Quote {
            text: "The juxtaposition of the old and new creates a tension that reveals something about both.",
            book_title: "Ways of Seeing",
            author: "John Berger",
        }),
    },
    WordEntry {
        text: "Axiom",
        pronunciation: "/ˈæksiəm/",
        part_of_speech: "noun",
        definition: "A statement or proposition regarded as self-evidently true; a fundamental principle.",
        example: "The axiom that parallel lines never meet forms the basis of Euclidean geometry.",
        etymology: "From Greek axioma (that which is thought worthy), from axios (worthy).",
        category: Category::Academic,
        quote: Some(Quote {
            text: "An axiom is a proposition regarded as self-evidently true without proof.",
            book_title: "Elements",
            author: "Euclid",
        }),
    },
    WordEntry {
        text: "Dichotomy",
        pronunciation: "/daɪˈkɒtəmi/",
        part_of_speech: "noun",
        definition: "A division into two mutually exclusive or contradictory groups or entities.",
        example: "The study explored the dichotomy between nature and nurture in child development.",
        etymology: "From Greek dikhotomia, from dikho- (in two) + -tomia (cutting).",
        category: Category::Academic,
        quote: Some(Quote {
            text: "The dichotomy between mind and body has been the source of endless philosophical debate.",
            book_title: "Meditations on First Philosophy",
            author: "René Descartes",
        }),
    },
    // --- Creative writing ---
    WordEntry {
        text: "Ephemeral",
        pronunciation: "/ɪˈfemərəl/",
        part_of_speech: "adjective",
        definition: "Lasting for only a short time; fleeting and transitory, like cherry blossoms or morning dew.",
        example: "The ephemeral beauty of the sunset reminded her to appreciate life's passing moments.",
        etymology: "From Greek ephēmeros, meaning 'lasting only a day,' from epi (on) + hēmera (day).",
        category: Category::Creative,
        quote: Some(Quote {
            text: "We are all ephemeral creatures, destined to leave only traces of ourselves behind.",
            book_title: "The Name of the Wind",
            author: "Patrick Rothfuss",
        }),
    },
    WordEntry {
        text: "Mellifluous",
        pronunciation: "/meˈlɪfluəs/",
        part_of_speech: "adjective",
        definition: "Sweet-sounding; pleasingly smooth and musical to the ear, often describing a voice or melody.",
        example: "His mellifluous voice made even the most mundane announcements sound like poetry.",
        etymology: "From Latin mellifluus, from mel (honey) + fluere (to flow), literally 'flowing with honey.'",
        category: Category::Creative,
        quote: Some(Quote {
            text: "Her voice was low and mellifluous, the kind of voice that could convince you of anything.",
            book_title: "The Great Gatsby",
            author: "F. Scott Fitzgerald",
        }),
    },
    WordEntry {
        text: "Ethereal",
        pronunciation: "/ɪˈθɪəriəl/",
        part_of_speech: "adjective",
        definition: "Extremely delicate and light; seeming too perfect for this world; heavenly or celestial.",
        example: "The dancer moved with an ethereal grace that made her seem to float above the stage.",
        etymology: "From Latin aethereus, from Greek aitherios (of the upper air), from aithēr (the pure upper air).",
        category: Category::Creative,
        quote: Some(Quote {
            text: "She had an ethereal quality about her, as if she might dissolve into mist at any moment.",
            book_title: "Wuthering Heights",
            author: "Emily Brontë",
        }),
    },
    WordEntry {
        text: "Luminous",
        pronunciation: "/ˈluːmɪnəs/",
        part_of_speech: "adjective",
        definition: "Full of or shedding light; bright, radiant, or glowing; also describing something intellectually brilliant.",
        example: "The luminous full moon cast silver shadows across the sleeping garden.",
        etymology: "From Latin luminosus, from lumen (light), related to lucere (to shine).",
        category: Category::Creative,
        quote: Some(Quote {
            text: "The luminous depths of the sky seemed to open up before her, revealing stars beyond counting.",
            book_title: "The Lord of the Rings",
            author: "J.R.R. Tolkien",
        }),
    },
    WordEntry {
        text: "Ineffable",
        pronunciation: "/ɪnˈefəbl/",
        part_of_speech: "adjective",
        definition: "Too great or extreme to be expressed or described in words; beyond verbal expression.",
        example: "The view from the mountaintop filled her with an ineffable sense of peace.",
        etymology: "From Latin ineffabilis, from in- (not) + effabilis (utterable), from effari (to speak out).",
        category: Category::Creative,
        quote: Some(Quote {
            text: "There are things known and there are things unknown, and in between are the doors of perception—the ineffable mysteries of existence.",
            book_title: "The Doors of Perception",
            author: "Aldous Huxley",
        }),
    },
    WordEntry {
        text: "Resplendent",
        pronunciation: "/rɪˈsplendənt/",
        part_of_speech: "adjective",
        definition: "Shining brilliantly; dressed in rich, impressive attire; dazzling in appearance.",
        example: "The bride looked resplendent in her grandmother's vintage lace wedding gown.",
        etymology: "From Latin resplendere, from re- (intensive) + splendere (to shine, glitter).",
        category: Category::Creative,
        quote: Some(Quote {
            text: "The queen appeared resplendent in cloth of gold, diamonds glittering at her throat.",
            book_title: "Wolf Hall",
            author: "Hilary Mantel",
        }),
    },
    WordEntry {
        text: "Petrichor",
        pronunciation: "/ˈpetrɪkɔːr/",
        part_of_speech: "noun",
        definition: "The pleasant, earthy smell produced when rain falls on dry soil.",
        example: "After months of drought, the petrichor that followed the first rain was intoxicating.",
        etymology: "Coined in 1964 from Greek petra (stone) + ichor (the fluid flowing in the veins of the gods).",
        category: Category::Creative,
        quote: Some(Quote {
            text: "The rain came down in sheets, and with it came the petrichor, that ancient perfume of the earth.",
            book_title: "The Overstory",
            author: "Richard Powers",
        }),
    },
    // --- Business ---
    WordEntry {
        text: "Synergy",
        pronunciation: "/ˈsɪnərdʒi/",
        part_of_speech: "noun",
        definition: "The interaction of elements that when combined produce a total effect greater than the sum of individual parts.",
        example: "The merger created synergy between the two companies' research departments.",
        etymology: "From Greek synergos (working together), from syn- (together) + ergon (work).",
        category: Category::Business,
        quote: Some(Quote {
            text: "The synergy of collaboration creates results that no individual effort could achieve alone.",
            book_title: "The 7 Habits of Highly Effective People",
            author: "Stephen R. Covey",
        }),
    },
    WordEntry {
        text: "Leverage",
        pronunciation: "/ˈlevərɪdʒ/",
        part_of_speech: "verb",
        definition: "To use something to maximum advantage; to strategically utilize resources or position.",
        example: "She leveraged her industry connections to secure the partnership deal.",
        etymology: "From Old French levier (to raise), from Latin levare (to lift), extended to business meaning in the 20th century.",
        category: Category::Business,
        quote: Some(Quote {
            text: "Give me a lever long enough and a fulcrum on which to place it, and I shall move the world.",
            book_title: "Collected Works",
            author: "Archimedes",
        }),
    },
    WordEntry {
        text: "Scalable",
        pronunciation: "/ˈskeɪləbl/",
        part_of_speech: "adjective",
        definition: "Able to be changed in size or scale; capable of growing or expanding efficiently.",
        example: "Investors were impressed by the startup's scalable business model.",
        etymology: "From Latin scala (ladder) + -able, popularized in tech and business contexts in the late 20th century.",
        category: Category::Business,
        quote: Some(Quote {
            text: "The key to building a successful technology company is creating a scalable platform that grows with demand.",
            book_title: "Zero to One",
            author: "Peter Thiel",
        }),
    },
    WordEntry {
        text: "Stakeholder",
        pronunciation: "/ˈsteɪkˌhoʊldər/",
        part_of_speech: "noun",
        definition: "A person or group with an interest or concern in a business or enterprise.",
        example: "The project manager scheduled meetings with all key stakeholders to gather requirements.",
        etymology: "From stake (a share or interest) + holder, first used in business context in the 1960s.",
        category: Category::Business,
        quote: Some(Quote {
            text: "Every stakeholder in an organization brings a unique perspective that must be heard and valued.",
            book_title: "Good to Great",
            author: "Jim Collins",
        }),
    },
    WordEntry {
        text: "Pivot",
        pronunciation: "/ˈpɪvət/",
        part_of_speech: "verb",
        definition: "To fundamentally change the direction or strategy of a business while maintaining core elements.",
        example: "When the market shifted, the company had to pivot from hardware to software services.",
        etymology: "From French pivot (hinge), extended to business strategy meaning in the startup era.",
        category: Category::Business,
        quote: Some(Quote {
            text: "A pivot is a structured course correction designed to test a new fundamental hypothesis about the product, strategy, and engine of growth.",
            book_title: "The Lean Startup",
            author: "Eric Ries",
        }),
    },
    WordEntry {
        text: "Benchmark",
        pronunciation: "/ˈbentʃˌmɑːrk/",
        part_of_speech: "noun",
        definition: "A standard or point of reference against which things may be compared or assessed.",
        example: "The industry leader's performance became the benchmark for all competitors.",
        etymology: "Originally a surveyor's mark cut in rock, extended to business meaning in the 1970s.",
        category: Category::Business,
        quote: Some(Quote {
            text: "What gets measured gets managed. A benchmark provides the standard against which all progress is measured.",
            book_title: "The Effective Executive",
            author: "Peter Drucker",
        }),
    },
    // --- Moods & mindfulness ---
    WordEntry {
        text: "Equanimity",
        pronunciation: "/ˌiːkwəˈnɪmɪti/",
        part_of_speech: "noun",
        definition: "Mental calmness and composure, especially in difficult situations; evenness of temper.",
        example: "She faced the crisis with remarkable equanimity, never losing her composure.",
        etymology: "From Latin aequanimitas, from aequus (even) + animus (mind, spirit).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "Equanimity arises when we accept the way things are.",
            book_title: "Wherever You Go, There You Are",
            author: "Jon Kabat-Zinn",
        }),
    },
    WordEntry {
        text: "Tranquil",
        pronunciation: "/ˈtræŋkwɪl/",
        part_of_speech: "adjective",
        definition: "Free from disturbance; calm, serene, and peaceful in quality or state.",
        example: "The tranquil lake reflected the mountains like a perfect mirror at dawn.",
        etymology: "From Latin tranquillus (calm, still), possibly related to trans- (across) + quies (rest).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "Tranquil pleasures last the longest; we are not fitted to bear the burden of great joys.",
            book_title: "Letters from a Stoic",
            author: "Seneca",
        }),
    },
    WordEntry {
        text: "Satori",
        pronunciation: "/səˈtɔːri/",
        part_of_speech: "noun",
        definition: "A sudden moment of awakening or enlightenment in Zen Buddhism; profound insight.",
        example: "During meditation, she experienced a satori that transformed her understanding of self.",
        etymology: "From Japanese 悟り (satori), meaning 'understanding' or 'awakening,' from satoru (to know).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "Satori is the sudden flashing into consciousness of a new truth hitherto undreamed of.",
            book_title: "Essays in Zen Buddhism",
            author: "D.T. Suzuki",
        }),
    },
    WordEntry {
        text: "Halcyon",
        pronunciation: "/ˈhælsiən/",
        part_of_speech: "adjective",
        definition: "Denoting a period of time in the past that was idyllically happy and peaceful.",
        example: "She often reminisced about the halcyon days of her childhood summers by the sea.",
        etymology: "From Greek halkyon (kingfisher), associated with calm seas during the bird's breeding season.",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "Those halcyon days when we believed anything was possible now seem like a distant dream.",
            book_title: "Brideshead Revisited",
            author: "Evelyn Waugh",
        }),
    },
    WordEntry {
        text: "Solace",
        pronunciation: "/ˈsɒləs/",
        part_of_speech: "noun",
        definition: "Comfort or consolation in a time of distress or sadness; a source of relief.",
        example: "She found solace in the garden, where the rhythm of nature soothed her troubled mind.",
        etymology: "From Latin solacium (comfort, consolation), from solari (to console).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "In the midst of winter, I found there was, within me, an invincible summer. And that makes me happy. For it says that no matter how hard the world pushes against me, within me, there's something stronger—something better, pushing right back. This was my solace.",
            book_title: "Return to Tipasa",
            author: "Albert Camus",
        }),
    },
    WordEntry {
        text: "Serenity",
        pronunciation: "/səˈrenɪti/",
        part_of_speech: "noun",
        definition: "The state of being calm, peaceful, and untroubled; a disposition free from stress.",
        example: "The monastery radiated a serenity that immediately calmed every visitor who entered.",
        etymology: "From Latin serenitas (clearness, calmness), from serenus (clear, bright, serene).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "God grant me the serenity to accept the things I cannot change, the courage to change the things I can, and the wisdom to know the difference.",
            book_title: "The Serenity Prayer",
            author: "Reinhold Niebuhr",
        }),
    },
    WordEntry {
        text: "Contemplative",
        pronunciation: "/kənˈtemplətɪv/",
        part_of_speech: "adjective",
        definition: "Expressing or involving prolonged thought; given to deep reflection and meditation.",
        example: "His contemplative nature led him to spend hours in quiet introspection.",
        etymology: "From Latin contemplativus, from contemplari (to gaze attentively, observe).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "The contemplative life is one devoted to the pursuit of wisdom and understanding through reflection.",
            book_title: "Nicomachean Ethics",
            author: "Aristotle",
        }),
    },
    WordEntry {
        text: "Melancholy",
        pronunciation: "/ˈmelənkɒli/",
        part_of_speech: "noun",
        definition: "A deep, pensive sadness; a thoughtful or gentle sorrow that can feel almost beautiful.",
        example: "There was a sweet melancholy in the autumn air as leaves drifted to the ground.",
        etymology: "From Greek melankholia (sadness), from melas (black) + kholē (bile), referring to ancient humoral theory.",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "There is a certain melancholy in growing older, a wisdom earned through loss.",
            book_title: "The Anatomy of Melancholy",
            author: "Robert Burton",
        }),
    },
    WordEntry {
        text: "Euphoria",
        pronunciation: "/juːˈfɔːriə/",
        part_of_speech: "noun",
        definition: "An intense feeling of well-being, elation, and happiness; a state of overwhelming joy.",
        example: "Crossing the finish line filled her with euphoria she had never experienced before.",
        etymology: "From Greek euphoria (power of enduring easily), from eu- (well) + pherein (to bear).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "The euphoria of victory was short-lived, replaced by the quiet satisfaction of a job well done.",
            book_title: "Man's Search for Meaning",
            author: "Viktor Frankl",
        }),
    },
    WordEntry {
        text: "Wistful",
        pronunciation: "/ˈwɪstfʊl/",
        part_of_speech: "adjective",
        definition: "Having or showing a feeling of vague or regretful longing; pensively sad.",
        example: "He gave a wistful smile as he looked at the old photographs from his university days.",
        etymology: "Perhaps from obsolete wistly (intently), influenced by wishful; first recorded in the early 17th century.",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "She looked at him with wistful eyes, knowing that this moment would never come again.",
            book_title: "The Age of Innocence",
            author: "Edith Wharton",
        }),
    },
    WordEntry {
        text: "Elation",
        pronunciation: "/ɪˈleɪʃən/",
        part_of_speech: "noun",
        definition: "Great happiness and exhilaration; a feeling of pride and joy at an achievement.",
        example: "The team's elation was palpable as they celebrated their championship victory.",
        etymology: "From Latin elatio (a lifting up), from efferre (to carry out, raise up).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "The elation of discovery surpasses any other pleasure the mind can experience.",
            book_title: "The Double Helix",
            author: "James D. Watson",
        }),
    },
    WordEntry {
        text: "Ennui",
        pronunciation: "/ɒnˈwiː/",
        part_of_speech: "noun",
        definition: "A feeling of listlessness and dissatisfaction arising from a lack of excitement or purpose.",
        example: "The endless gray winter days filled him with a deep sense of ennui.",
        etymology: "From French ennui (boredom), from Old French enui (annoyance), from enuier (to annoy).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "Ennui had taken possession of me, that ennui which comes from too much ease.",
            book_title: "Madame Bovary",
            author: "Gustave Flaubert",
        }),
    },
    WordEntry {
        text: "Catharsis",
        pronunciation: "/kəˈθɑːsɪs/",
        part_of_speech: "noun",
        definition: "The process of releasing strong emotions through art or expression; emotional purification.",
        example: "Writing in her journal provided a catharsis that helped her process the difficult year.",
        etymology: "From Greek katharsis (purification, cleansing), from kathairein (to purify).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "Tragedy, then, is an imitation of an action that is serious, complete, and of a certain magnitude; in language embellished with each kind of artistic ornament, the several kinds being found in separate parts of the play; in the form of action, not of narrative; through pity and fear effecting the proper catharsis of these emotions.",
            book_title: "Poetics",
            author: "Aristotle",
        }),
    },
    WordEntry {
        text: "Placid",
        pronunciation: "/ˈplæsɪd/",
        part_of_speech: "adjective",
        definition: "Not easily upset or excited; calm and peaceful with little movement or activity.",
        example: "The placid waters of the lake perfectly mirrored the surrounding mountains.",
        etymology: "From Latin placidus (gentle, quiet), from placere (to please).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "The placid surface of the pond belied the turmoil of life beneath.",
            book_title: "Walden",
            author: "Henry David Thoreau",
        }),
    },
    WordEntry {
        text: "Ebullient",
        pronunciation: "/ɪˈbʌliənt/",
        part_of_speech: "adjective",
        definition: "Overflowing with enthusiasm, excitement, or cheerfulness; exuberantly lively.",
        example: "Her ebullient personality made every gathering feel like a celebration.",
        etymology: "From Latin ebullire (to bubble up), from e- (out) + bullire (to boil).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "Her ebullient nature was infectious; no one could remain sullen in her presence.",
            book_title: "Anne of Green Gables",
            author: "L.M. Montgomery",
        }),
    },
    WordEntry {
        text: "Pensive",
        pronunciation: "/ˈpensɪv/",
        part_of_speech: "adjective",
        definition: "Engaged in deep or serious thought, often with a tinge of sadness or dreaminess.",
        example: "She sat by the window in a pensive mood, watching the rain fall.",
        etymology: "From Old French pensif, from penser (to think), from Latin pensare (to weigh, consider).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "He fell into a pensive silence, his thoughts wandering to distant memories.",
            book_title: "Jane Eyre",
            author: "Charlotte Brontë",
        }),
    },
    WordEntry {
        text: "Rapture",
        pronunciation: "/ˈræptʃər/",
        part_of_speech: "noun",
        definition: "A feeling of intense pleasure or joy; ecstatic delight that transports one beyond ordinary experience.",
        example: "The audience listened in rapture as the orchestra performed the symphony's finale.",
        etymology: "From Latin raptura (seizure), from rapere (to seize), suggesting being 'seized' by emotion.",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "I felt a rapture so intense that it seemed as if the heavens had opened.",
            book_title: "Confessions",
            author: "Saint Augustine",
        }),
    },
    WordEntry {
        text: "Languor",
        pronunciation: "/ˈlæŋɡər/",
        part_of_speech: "noun",
        definition: "A state of pleasant tiredness or dreamy inactivity; a relaxed, unhurried quality.",
        example: "The summer heat induced a languor that made even simple tasks feel luxuriously slow.",
        etymology: "From Latin languor (faintness, weariness), from languere (to be faint or weak).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "A delicious languor stole over her as the afternoon sun warmed her skin.",
            book_title: "The Awakening",
            author: "Kate Chopin",
        }),
    },
    WordEntry {
        text: "Center",
        pronunciation: "/ˈsɛntər/",
        part_of_speech: "verb",
        definition: "To bring attention back to the present moment and restore emotional or mental balance.",
        example: "She paused to center herself before responding to the difficult conversation.",
        etymology: "From Latin 'centrum', meaning the middle point; adopted in mindfulness to describe returning to inner balance.",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "When you center yourself, you find a stillness at the core of your being that nothing can disturb.",
            book_title: "The Power of Now",
            author: "Eckhart Tolle",
        }),
    },
    WordEntry {
        text: "Panacea",
        pronunciation: "/ˌpænəˈsiːə/",
        part_of_speech: "noun",
        definition: "A solution or remedy for all difficulties or diseases.",
        example: "Education is often seen as a panacea for social problems.",
        etymology: "From Greek panakeia (universal remedy), from pan (all) + akos (cure).",
        category: Category::Mindfulness,
        quote: Some(Quote {
            text: "There is no panacea for the problems of humanity, only the slow, patient work of understanding.",
            book_title: "The Open Society and Its Enemies",
            author: "Karl Popper",
        }),
    },
    // --- General vocabulary ---
    WordEntry {
        text: "Quintessential",
        pronunciation: "/ˌkwɪntɪˈsenʃəl/",
        part_of_speech: "adjective",
        definition: "Representing the most perfect or typical example of a quality or class; the purest essence of something.",
        example: "The cozy café was the quintessential Parisian experience she had always dreamed of.",
        etymology: "From medieval Latin quinta essentia (fifth essence), referring to a substance beyond the four elements.",
        category: Category::General,
        quote: Some(Quote {
            text: "He was the quintessential English gentleman, polite to a fault and impeccably dressed.",
            book_title: "The Remains of the Day",
            author: "Kazuo Ishiguro",
        }),
    },
    WordEntry {
        text: "Sanguine",
        pronunciation: "/ˈsæŋɡwɪn/",
        part_of_speech: "adjective",
        definition: "Optimistic and positive, especially in a difficult situation; cheerfully confident about the future.",
        example: "Despite the challenging forecast, she remained sanguine about the project's success.",
        etymology: "From Latin sanguineus (of blood), based on medieval belief that blood was associated with cheerful temperament.",
        category: Category::General,
        quote: Some(Quote {
            text: "He was of a sanguine temperament, always expecting the best even when circumstances suggested otherwise.",
            book_title: "David Copperfield",
            author: "Charles Dickens",
        }),
    },
    WordEntry {
        text: "Reverence",
        pronunciation: "/ˈrevərəns/",
        part_of_speech: "noun",
        definition: "Deep respect and admiration for someone or something; a feeling of awe and devotion.",
        example: "She spoke of her grandmother with such reverence that everyone in the room fell silent.",
        etymology: "From Latin reverentia, from revereri (to stand in awe of), from re- + vereri (to fear, respect).",
        category: Category::General,
        quote: Some(Quote {
            text: "Reverence for life affords me my fundamental principle of morality.",
            book_title: "Out of My Life and Thought",
            author: "Albert Schweitzer",
        }),
    },
];

//! Fixed name, location and threat tables used for synthetic species

use spectrum_core::Category;

/// (common name, scientific name) pairs per category
pub fn names_for(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Mammals => &MAMMALS,
        Category::Birds => &BIRDS,
        Category::Fish => &FISH,
        Category::Reptiles => &REPTILES,
        Category::Amphibians => &AMPHIBIANS,
        Category::Insects => &INSECTS,
        Category::Plants => &PLANTS,
    }
}

const MAMMALS: [(&str, &str); 15] = [
    ("African Elephant", "Loxodonta africana"),
    ("Tiger", "Panthera tigris"),
    ("Giant Panda", "Ailuropoda melanoleuca"),
    ("Polar Bear", "Ursus maritimus"),
    ("Blue Whale", "Balaenoptera musculus"),
    ("Gorilla", "Gorilla gorilla"),
    ("Orangutan", "Pongo abelii"),
    ("Snow Leopard", "Panthera uncia"),
    ("Red Panda", "Ailurus fulgens"),
    ("Cheetah", "Acinonyx jubatus"),
    ("Lion", "Panthera leo"),
    ("Jaguar", "Panthera onca"),
    ("Gray Wolf", "Canis lupus"),
    ("Bison", "Bison bison"),
    ("Rhinoceros", "Rhinocerotidae"),
];

const BIRDS: [(&str, &str); 13] = [
    ("Bald Eagle", "Haliaeetus leucocephalus"),
    ("California Condor", "Gymnogyps californianus"),
    ("Kakapo", "Strigops habroptila"),
    ("Whooping Crane", "Grus americana"),
    ("Spoon-billed Sandpiper", "Calidris pygmaea"),
    ("Ivory-billed Woodpecker", "Campephilus principalis"),
    ("Hawaiian Crow", "Corvus hawaiiensis"),
    ("Philippine Eagle", "Pithecophaga jefferyi"),
    ("Great Indian Bustard", "Ardeotis nigriceps"),
    ("Spix's Macaw", "Cyanopsitta spixii"),
    ("Northern Bald Ibis", "Geronticus eremita"),
    ("Siberian Crane", "Leucogeranus leucogeranus"),
    ("Waved Albatross", "Phoebastria irrorata"),
];

const FISH: [(&str, &str); 10] = [
    ("Bluefin Tuna", "Thunnus thynnus"),
    ("Great White Shark", "Carcharodon carcharias"),
    ("Atlantic Cod", "Gadus morhua"),
    ("Sturgeon", "Acipenseridae"),
    ("Salmon", "Salmo salar"),
    ("Manta Ray", "Manta birostris"),
    ("Hammerhead Shark", "Sphyrnidae"),
    ("Grouper", "Epinephelus"),
    ("Barracuda", "Sphyraena"),
    ("Marlin", "Istiophoridae"),
];

const REPTILES: [(&str, &str); 9] = [
    ("Green Sea Turtle", "Chelonia mydas"),
    ("Komodo Dragon", "Varanus komodoensis"),
    ("Gharial", "Gavialis gangeticus"),
    ("Galapagos Tortoise", "Chelonoidis nigra"),
    ("King Cobra", "Ophiophagus hannah"),
    ("Black Mamba", "Dendroaspis polylepis"),
    ("Anaconda", "Eunectes murinus"),
    ("Crocodile", "Crocodylidae"),
    ("Iguana", "Iguana iguana"),
];

const AMPHIBIANS: [(&str, &str); 8] = [
    ("Golden Frog", "Atelopus zeteki"),
    ("Axolotl", "Ambystoma mexicanum"),
    ("Poison Dart Frog", "Dendrobatidae"),
    ("Salamander", "Salamandridae"),
    ("Toad", "Bufonidae"),
    ("Tree Frog", "Hylidae"),
    ("Newt", "Pleurodelinae"),
    ("Caecilian", "Gymnophiona"),
];

const INSECTS: [(&str, &str); 9] = [
    ("Monarch Butterfly", "Danaus plexippus"),
    ("Honeybee", "Apis mellifera"),
    ("Bumblebee", "Bombus"),
    ("Dragonfly", "Odonata"),
    ("Beetle", "Coleoptera"),
    ("Moth", "Lepidoptera"),
    ("Grasshopper", "Caelifera"),
    ("Ant", "Formicidae"),
    ("Butterfly", "Rhopalocera"),
];

const PLANTS: [(&str, &str); 9] = [
    ("Baobab Tree", "Adansonia"),
    ("Giant Sequoia", "Sequoiadendron giganteum"),
    ("Venus Flytrap", "Dionaea muscipula"),
    ("Orchid", "Orchidaceae"),
    ("Cactus", "Cactaceae"),
    ("Fern", "Pteridophyta"),
    ("Moss", "Bryophyta"),
    ("Algae", "Algae"),
    ("Mangrove", "Rhizophora"),
];

/// A city used as a representative species location
#[derive(Debug, Clone, Copy)]
pub struct SampleLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub country: &'static str,
}

pub const SAMPLE_LOCATIONS: [SampleLocation; 15] = [
    SampleLocation { latitude: 40.7128, longitude: -74.006, country: "USA" },
    SampleLocation { latitude: 51.5074, longitude: -0.1278, country: "UK" },
    SampleLocation { latitude: -33.8688, longitude: 151.2093, country: "Australia" },
    SampleLocation { latitude: -22.9068, longitude: -43.1729, country: "Brazil" },
    SampleLocation { latitude: 35.6762, longitude: 139.6503, country: "Japan" },
    SampleLocation { latitude: 28.6139, longitude: 77.209, country: "India" },
    SampleLocation { latitude: -1.2921, longitude: 36.8219, country: "Kenya" },
    SampleLocation { latitude: -25.7461, longitude: 28.1881, country: "South Africa" },
    SampleLocation { latitude: 55.7558, longitude: 37.6173, country: "Russia" },
    SampleLocation { latitude: 39.9042, longitude: 116.4074, country: "China" },
    SampleLocation { latitude: -15.7975, longitude: -47.8919, country: "Brazil" },
    SampleLocation { latitude: 19.4326, longitude: -99.1332, country: "Mexico" },
    SampleLocation { latitude: -34.6037, longitude: -58.3816, country: "Argentina" },
    SampleLocation { latitude: 1.3521, longitude: 103.8198, country: "Singapore" },
    SampleLocation { latitude: 30.0444, longitude: 31.2357, country: "Egypt" },
];

/// (code, title) entries from the IUCN threats classification scheme
pub const THREAT_TYPES: [(&str, &str); 10] = [
    ("1.1", "Housing & urban areas"),
    ("2.1", "Annual & perennial non-timber crops"),
    ("3.2", "Mining & quarrying"),
    ("4.1", "Roads & railroads"),
    ("5.1", "Hunting & trapping"),
    ("6.1", "Recreational activities"),
    ("7.1", "Fire & fire suppression"),
    ("8.1", "Invasive species"),
    ("9.1", "Pollution"),
    ("11.1", "Habitat shifting & alteration"),
];

pub const THREAT_TIMING: &str = "Ongoing";
pub const THREAT_SCOPE: &str = "Majority";
pub const THREAT_SEVERITY: &str = "Slow, Significant Declines";

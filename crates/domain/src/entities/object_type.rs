//! Catalog object-type vocabulary
//!
//! Each entry pairs the catalog's long type name and condensed code with a
//! short explanation and the noun phrase used when describing the object in
//! a reply ("a galaxy", "an infrared source").

use serde::Serialize;

/// One catalog object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectType {
    /// Long type name as returned by the catalog ("Galaxy")
    pub name: &'static str,
    /// Condensed type code ("G")
    pub condensed: &'static str,
    /// Catalog explanation ("Galaxy")
    pub explanation: &'static str,
    /// Indefinite noun phrase for replies ("a galaxy")
    pub description: &'static str,
}

impl ObjectType {
    const fn new(
        name: &'static str,
        condensed: &'static str,
        explanation: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            condensed,
            explanation,
            description,
        }
    }

    /// Look up a type by long name, falling back to the condensed code
    #[must_use]
    pub fn lookup(code: &str) -> Option<&'static Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        OBJECT_TYPES
            .iter()
            .find(|t| t.name == code)
            .or_else(|| OBJECT_TYPES.iter().find(|t| t.condensed == code))
    }

    /// The full vocabulary in catalog order
    #[must_use]
    pub fn all() -> &'static [Self] {
        OBJECT_TYPES
    }

    /// Whether this is the catalog's placeholder for unclassified objects
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.name == "Unknown"
    }
}

static OBJECT_TYPES: &[ObjectType] = &[
    ObjectType::new("Unknown", "?", "Object of unknown nature", "an object of unknown nature"),
    ObjectType::new("Transient", "ev", "transient event", "a transient object"),
    ObjectType::new("Radio", "Rad", "Radio-source", "a radio source"),
    ObjectType::new("Radio(m)", "mR", "metric Radio-source", "a metre-wave radio source"),
    ObjectType::new("Radio(cm)", "cm", "centimetric Radio-source", "a cm-wave radio source"),
    ObjectType::new("Radio(mm)", "mm", "millimetric Radio-source", "a mm-wave radio source"),
    ObjectType::new("Radio(sub-mm)", "smm", "sub-millimetric source", "a sub-mm radio source"),
    ObjectType::new("HI", "HI", "HI (21cm) source", "a source of emission from hydrogen"),
    ObjectType::new("radioBurst", "rB", "radio Burst", "a radio burst"),
    ObjectType::new("Maser", "Mas", "Maser", "a maser"),
    ObjectType::new("IR", "IR", "Infra-Red source", "an infrared source"),
    ObjectType::new("IR>30um", "FIR", "Far-IR source (l >= 30 um)", "a far-infrared source"),
    ObjectType::new("IR<10um", "NIR", "Near-IR source (l < 10 um)", "a near-infrared source"),
    ObjectType::new("Red", "red", "Very red source", "a very red object"),
    ObjectType::new("RedExtreme", "ERO", "Extremely Red Object", "an extremely red object"),
    ObjectType::new("Blue", "blu", "Blue object", "a blue object"),
    ObjectType::new("UV", "UV", "UV-emission source", "an ultraviolet source"),
    ObjectType::new("X", "X", "X-ray source", "an X-ray source"),
    ObjectType::new("ULX?", "UX?", "Ultra-luminous X-ray candidate", "a possible ultra-luminous X-ray source"),
    ObjectType::new("ULX", "ULX", "Ultra-luminous X-ray source", "an ultra-luminous X-ray source"),
    ObjectType::new("gamma", "gam", "gamma-ray source", "a gamma-ray source"),
    ObjectType::new("gammaBurst", "gB", "gamma-ray Burst", "a gamma-ray burst"),
    ObjectType::new("Inexistent", "err", "Not an object (error, artefact, ...)", "an error in the database"),
    ObjectType::new("Gravitation", "grv", "Gravitational Source", "a clump of dark matter"),
    ObjectType::new("LensingEv", "Lev", "(Micro)Lensing Event", "a past microlensing event"),
    ObjectType::new("Candidate_LensSystem", "LS?", "Possible gravitational lens System", "a possible gravitational lens system"),
    ObjectType::new("Candidate_Lens", "Le?", "Possible gravitational lens", "a possible gravitational lens"),
    ObjectType::new("Possible_lensImage", "LI?", "Possible gravitationally lensed image", "a possible gravitationally lensed image"),
    ObjectType::new("GravLens", "gLe", "Gravitational Lens", "a gravitational lens"),
    ObjectType::new("GravLensSystem", "gLS", "Gravitational Lens System (lens+images)", "a gravitational lens system"),
    ObjectType::new("Candidates", "..?", "Candidate objects", "a candidate object"),
    ObjectType::new("Possible_G", "G?", "Possible Galaxy", "a possible galaxy"),
    ObjectType::new("Possible_SClG", "SC?", "Possible Supercluster of Galaxies", "a possible supercluster of galaxies"),
    ObjectType::new("Possible_ClG", "C?G", "Possible Cluster of Galaxies", "a possible cluster of galaxies"),
    ObjectType::new("Possible_GrG", "Gr?", "Possible Group of Galaxies", "a possible group of galaxies"),
    ObjectType::new("Candidate_**", "**?", "Physical Binary Candidate", "a candidate binary star system"),
    ObjectType::new("Candidate_EB*", "EB?", "Eclipsing Binary Candidate", "a candidate eclipsing binary star system"),
    ObjectType::new("Candidate_Symb*", "Sy?", "Symbiotic Star Candidate", "a candidate symbiotic star"),
    ObjectType::new("Candidate_CV*", "CV?", "Cataclysmic Binary Candidate", "a candidate cataclysmic binary star system"),
    ObjectType::new("Candidate_Nova", "No?", "Nova Candidate", "a candidate nova"),
    ObjectType::new("Candidate_XB*", "XB?", "X-ray binary Candidate", "a candidate X-ray binary system"),
    ObjectType::new("Candidate_LMXB", "LX?", "Low-Mass X-ray binary Candidate", "a candidate low-mass X-ray binary system"),
    ObjectType::new("Candidate_HMXB", "HX?", "High-Mass X-ray binary Candidate", "a candidate high-mass X-ray binary system"),
    ObjectType::new("Candidate_Pec*", "Pec?", "Possible Peculiar Star", "a possible peculiar star"),
    ObjectType::new("Candidate_YSO", "Y*?", "Young Stellar Object Candidate", "a candidate young stellar object"),
    ObjectType::new("Candidate_pMS*", "pr?", "Pre-main sequence Star Candidate", "a candidate pre-main sequence star"),
    ObjectType::new("Candidate_TTau*", "TT?", "T Tau star Candidate", "a candidate T Tauri star"),
    ObjectType::new("Candidate_C*", "C*?", "Possible Carbon Star", "a possible carbon star"),
    ObjectType::new("Candidate_S*", "S*?", "Possible S Star", "a possible S star"),
    ObjectType::new("Candidate_OH", "OH?", "Possible Star with envelope of OH/IR type", "a possible OH/IR star"),
    ObjectType::new("Candidate_CH", "CH?", "Possible Star with envelope of CH type", "a possible CH star"),
    ObjectType::new("Candidate_WR*", "WR?", "Possible Wolf-Rayet Star", "a possible Wolf-Rayet star"),
    ObjectType::new("Candidate_Be*", "Be?", "Possible Be Star", "a possible Be star"),
    ObjectType::new("Candidate_Ae*", "Ae?", "Possible Herbig Ae/Be Star", "a possible Herbig Ae/Be star"),
    ObjectType::new("Candidate_HB*", "HB?", "Possible Horizontal Branch Star", "a possible horizontal branch star"),
    ObjectType::new("Candidate_RRLyr", "RR?", "Possible Star of RR Lyr type", "a possible RR Lyrae variable star"),
    ObjectType::new("Candidate_Cepheid", "Ce?", "Possible Cepheid", "a possible Cepheid variable star"),
    ObjectType::new("Candidate_RGB*", "RB?", "Possible Red Giant Branch star", "a possible red giant branch star"),
    ObjectType::new("Candidate_SG*", "sg?", "Possible Supergiant star", "a possible supergiant star"),
    ObjectType::new("Candidate_RSG*", "s?r", "Possible Red supergiant star", "a possible red supergiant star"),
    ObjectType::new("Candidate_YSG*", "s?y", "Possible Yellow supergiant star", "a possible yellow supergiant star"),
    ObjectType::new("Candidate_BSG*", "s?b", "Possible Blue supergiant star", "a possible blue supergiant star"),
    ObjectType::new("Candidate_AGB*", "AB?", "Possible Asymptotic Giant Branch Star", "a possible asymptotic giant branch star"),
    ObjectType::new("Candidate_post-AGB*", "pA?", "Post-AGB Star Candidate", "a candidate post-AGB star"),
    ObjectType::new("Candidate_BSS", "BS?", "Candidate blue Straggler Star", "a candidate blue straggler star"),
    ObjectType::new("Candidate_WD*", "WD?", "White Dwarf Candidate", "a candidate white dwarf"),
    ObjectType::new("Candidate_NS", "N*?", "Neutron Star Candidate", "a candidate neutron star"),
    ObjectType::new("Candidate_BH", "BH?", "Black Hole Candidate", "a candidate black hole"),
    ObjectType::new("Candidate_SN*", "SN?", "SuperNova Candidate", "a candidate supernova"),
    ObjectType::new("Candidate_low-mass*", "LM?", "Low-mass star candidate", "a candidate low-mass star"),
    ObjectType::new("Candidate_brownD*", "BD?", "Brown Dwarf Candidate", "a candidate brown dwarf"),
    ObjectType::new("multiple_object", "mul", "Composite object", "a composite object"),
    ObjectType::new("Region", "reg", "Region defined in the sky", "a region in the sky"),
    ObjectType::new("Void", "vid", "Underdense region of the Universe", "an underdense region"),
    ObjectType::new("SuperClG", "SCG", "Supercluster of Galaxies", "a supercluster of galaxies"),
    ObjectType::new("ClG", "ClG", "Cluster of Galaxies", "a cluster of galaxies"),
    ObjectType::new("GroupG", "GrG", "Group of Galaxies", "a group of galaxies"),
    ObjectType::new("Compact_Gr_G", "CGG", "Compact Group of Galaxies", "a compact group of galaxies"),
    ObjectType::new("PairG", "PaG", "Pair of Galaxies", "a pair of galaxies"),
    ObjectType::new("IG", "IG", "Interacting Galaxies", "a pair of interacting galaxies"),
    ObjectType::new("Cl*?", "C?*", "Possible (open) star cluster", "a possible star cluster"),
    ObjectType::new("GlCl?", "Gl?", "Possible Globular Cluster", "a possible globular cluster"),
    ObjectType::new("Cl*", "Cl*", "Cluster of Stars", "a cluster of stars"),
    ObjectType::new("GlCl", "GlC", "Globular Cluster", "a globular cluster"),
    ObjectType::new("OpCl", "OpC", "Open (galactic) Cluster", "an open cluster of stars"),
    ObjectType::new("Assoc*", "As*", "Association of Stars", "an association of stars"),
    ObjectType::new("Stream*", "St*", "Stellar Stream", "a stellar stream"),
    ObjectType::new("MouvGroup", "MGr", "Moving Group", "a moving group of stars"),
    ObjectType::new("**", "**", "Double or multiple star", "a double or multiple star"),
    ObjectType::new("EB*", "EB*", "Eclipsing binary", "an eclipsing binary"),
    ObjectType::new("EB*Algol", "Al*", "Eclipsing binary of Algol type (detached)", "a detached eclipsing binary"),
    ObjectType::new("EB*betLyr", "bL*", "Eclipsing binary of beta Lyr type (semi-detached)", "a semi-detached eclipsing binary"),
    ObjectType::new("EB*WUMa", "WU*", "Eclipsing binary of W UMa type (contact binary)", "a contact binary star system"),
    ObjectType::new("EB*Planet", "EP*", "Star showing eclipses by its planet", "a star being eclipsed by its planet"),
    ObjectType::new("SB*", "SB*", "Spectroscopic binary", "a binary star system"),
    ObjectType::new("EllipVar", "El*", "Ellipsoidal variable Star", "an ellipsoidal variable star"),
    ObjectType::new("Symbiotic*", "Sy*", "Symbiotic Star", "a symbiotic star"),
    ObjectType::new("CataclyV*", "CV*", "Cataclysmic Variable Star", "a cataclysmic variable star"),
    ObjectType::new("DQHer", "DQ*", "CV DQ Her type (intermediate polar)", "an intermediate polar cataclysmic variable star"),
    ObjectType::new("AMHer", "AM*", "CV of AM Her type (polar)", "a polar cataclysmic variable star"),
    ObjectType::new("Nova-like", "NL*", "Nova-like Star", "a nova-like star"),
    ObjectType::new("Nova", "No*", "Nova", "a nova"),
    ObjectType::new("DwarfNova", "DN*", "Dwarf Nova", "a dwarf nova"),
    ObjectType::new("XB", "XB*", "X-ray Binary", "an X-ray binary system"),
    ObjectType::new("LMXB", "LXB", "Low Mass X-ray Binary", "a low-mass X-ray binary system"),
    ObjectType::new("HMXB", "HXB", "High Mass X-ray Binary", "a high-mass X-ray binary system"),
    ObjectType::new("ISM", "ISM", "Interstellar matter", "some interstellar matter"),
    ObjectType::new("PartofCloud", "PoC", "Part of Cloud", "part of a gas cloud"),
    ObjectType::new("PN?", "PN?", "Possible Planetary Nebula", "a possible planetary nebula"),
    ObjectType::new("ComGlob", "CGb", "Cometary Globule", "a cometary globule"),
    ObjectType::new("Bubble", "bub", "Bubble", "a bubble of ionised gas"),
    ObjectType::new("EmObj", "EmO", "Emission Object", "an emission object"),
    ObjectType::new("Cloud", "Cld", "Cloud", "a gas cloud"),
    ObjectType::new("GalNeb", "GNe", "Galactic Nebula", "a nebula in our Galaxy"),
    ObjectType::new("BrNeb", "BNe", "Bright Nebula", "a bright nebula"),
    ObjectType::new("DkNeb", "DNe", "Dark Cloud (nebula)", "a dark nebula"),
    ObjectType::new("RfNeb", "RNe", "Reflection Nebula", "a reflection nebula"),
    ObjectType::new("MolCld", "MoC", "Molecular Cloud", "a molecular cloud"),
    ObjectType::new("Globule", "glb", "Globule (low-mass dark cloud)", "a globule"),
    ObjectType::new("denseCore", "cor", "Dense core", "a dense core of gas"),
    ObjectType::new("SFregion", "SFR", "Star forming region", "a star-forming region"),
    ObjectType::new("HVCld", "HVC", "High-velocity Cloud", "a high-velocity cloud"),
    ObjectType::new("HII", "HII", "HII (ionized) region", "a region of ionised gas"),
    ObjectType::new("PN", "PN", "Planetary Nebula", "a planetary nebula"),
    ObjectType::new("HIshell", "sh", "HI shell", "a shell of hydrogen gas"),
    ObjectType::new("SNR?", "SR?", "SuperNova Remnant Candidate", "a candidate supernova remnant"),
    ObjectType::new("SNR", "SNR", "SuperNova Remnant", "a supernova remnant"),
    ObjectType::new("Circumstellar", "cir", "CircumStellar matter", "some circumstellar matter"),
    ObjectType::new("outflow?", "of?", "Outflow candidate", "a candidate outflow of material"),
    ObjectType::new("Outflow", "out", "Outflow", "an outflow of material"),
    ObjectType::new("HH", "HH", "Herbig-Haro Object", "a Herbig-Haro object"),
    ObjectType::new("Star", "*", "Star", "a star"),
    ObjectType::new("*inCl", "*iC", "Star in Cluster", "a star in a cluster"),
    ObjectType::new("*inNeb", "*iN", "Star in Nebula", "a star in a nebula"),
    ObjectType::new("*inAssoc", "*iA", "Star in Association", "a star in an association of stars"),
    ObjectType::new("*in**", "*i*", "Star in double system", "a star in a double system"),
    ObjectType::new("V*?", "V*?", "Star suspected of Variability", "a possibly variable star"),
    ObjectType::new("Pec*", "Pe*", "Peculiar Star", "a peculiar star"),
    ObjectType::new("HB*", "HB*", "Horizontal Branch Star", "a horizontal branch star"),
    ObjectType::new("YSO", "Y*O", "Young Stellar Object", "a young stellar object"),
    ObjectType::new("Ae*", "Ae*", "Herbig Ae/Be star", "a Herbig Ae/Be star"),
    ObjectType::new("Em*", "Em*", "Emission-line Star", "an emission-line star"),
    ObjectType::new("Be*", "Be*", "Be Star", "a Be star"),
    ObjectType::new("BlueStraggler", "BS*", "Blue Straggler Star", "a blue straggler star"),
    ObjectType::new("RGB*", "RG*", "Red Giant Branch star", "a red giant branch star"),
    ObjectType::new("AGB*", "AB*", "Asymptotic Giant Branch Star (He-burning)", "an asymptotic giant branch star"),
    ObjectType::new("C*", "C*", "Carbon Star", "a carbon star"),
    ObjectType::new("S*", "S*", "S Star", "an S star"),
    ObjectType::new("SG*", "sg*", "Evolved supergiant star", "an evolved supergiant star"),
    ObjectType::new("RedSG*", "s*r", "Red supergiant star", "a red supergiant star"),
    ObjectType::new("YellowSG*", "s*y", "Yellow supergiant star", "a yellow supergiant star"),
    ObjectType::new("BlueSG*", "s*b", "Blue supergiant star", "a blue supergiant star"),
    ObjectType::new("post-AGB*", "pA*", "Post-AGB Star (proto-PN)", "a post-AGB star"),
    ObjectType::new("WD*", "WD*", "White Dwarf", "a white dwarf"),
    ObjectType::new("pulsWD*", "ZZ*", "Pulsating White Dwarf", "a pulsating white dwarf"),
    ObjectType::new("low-mass*", "LM*", "Low-mass star (M<1solMass)", "a low-mass star"),
    ObjectType::new("brownD*", "BD*", "Brown Dwarf (M<0.08solMass)", "a brown dwarf"),
    ObjectType::new("Neutron*", "N*", "Confirmed Neutron Star", "a neutron star"),
    ObjectType::new("OH/IR", "OH*", "OH/IR star", "an OH/IR star"),
    ObjectType::new("CH", "CH*", "Star with envelope of CH type", "a CH star"),
    ObjectType::new("pMS*", "pr*", "Pre-main sequence Star", "a pre-main sequence star"),
    ObjectType::new("TTau*", "TT*", "T Tau-type Star", "a T Tauri-type star"),
    ObjectType::new("WR*", "WR*", "Wolf-Rayet Star", "a Wolf-Rayet star"),
    ObjectType::new("PM*", "PM*", "High proper-motion Star", "a star with high proper motion"),
    ObjectType::new("HV*", "HV*", "High-velocity Star", "a high-velocity star"),
    ObjectType::new("V*", "V*", "Variable Star", "a variable star"),
    ObjectType::new("Irregular_V*", "Ir*", "Variable Star of irregular type", "an irregular variable star"),
    ObjectType::new("Orion_V*", "Or*", "Variable Star of Orion Type", "an Orion variable star"),
    ObjectType::new("Rapid_Irreg_V*", "RI*", "Variable Star with rapid variations", "a rapidly variable star"),
    ObjectType::new("Eruptive*", "Er*", "Eruptive variable Star", "an eruptive variable star"),
    ObjectType::new("Flare*", "Fl*", "Flare Star", "a flare star"),
    ObjectType::new("FUOr", "FU*", "Variable Star of FU Ori type", "an FU Orionis variable star"),
    ObjectType::new("Erupt*RCrB", "RC*", "Variable Star of R CrB type", "an R Coronae Borealis variable star"),
    ObjectType::new("RotV*", "Ro*", "Rotationally variable Star", "a rotationally variable star"),
    ObjectType::new("RotV*alf2CVn", "a2*", "Variable Star of alpha2 CVn type", "an alpha2 Canum Venaticorum variable star"),
    ObjectType::new("Pulsar", "Psr", "Pulsar", "a pulsar"),
    ObjectType::new("BYDra", "BY*", "Variable of BY Dra type", "a BY Draconis variable star"),
    ObjectType::new("RSCVn", "RS*", "Variable of RS CVn type", "an RS Canum Venaticorum variable star"),
    ObjectType::new("PulsV*", "Pu*", "Pulsating variable Star", "a pulsating variable star"),
    ObjectType::new("RRLyr", "RR*", "Variable Star of RR Lyr type", "an RR Lyrae variable star"),
    ObjectType::new("Cepheid", "Ce*", "Cepheid variable Star", "a Cepheid variable star"),
    ObjectType::new("PulsV*delSct", "dS*", "Variable Star of delta Sct type", "a delta Scuti variable star"),
    ObjectType::new("PulsV*RVTau", "RV*", "Variable Star of RV Tau type", "an RV Tauri variable star"),
    ObjectType::new("PulsV*WVir", "WV*", "Variable Star of W Vir type", "a W Virginis variable star"),
    ObjectType::new("PulsV*bCep", "bC*", "Variable Star of beta Cep type", "a beta Cephei variable star"),
    ObjectType::new("deltaCep", "cC*", "Classical Cepheid (delta Cep type)", "a classical Cepheid variable star"),
    ObjectType::new("gammaDor", "gD*", "Variable Star of gamma Dor type", "a gamma Doradus variable star"),
    ObjectType::new("pulsV*SX", "SX*", "Variable Star of SX Phe type (subdwarf)", "an SX Phoenicis variable star"),
    ObjectType::new("LPV*", "LP*", "Long-period variable star", "a long-period variable star"),
    ObjectType::new("Mira", "Mi*", "Variable Star of Mira Cet type", "a Mira Ceti variable star"),
    ObjectType::new("semi-regV*", "sr*", "Semi-regular pulsating Star", "a semi-regular pulsating star"),
    ObjectType::new("SN", "SN*", "SuperNova", "a supernova"),
    ObjectType::new("Sub-stellar", "su*", "Sub-stellar object", "a sub-stellar object"),
    ObjectType::new("Planet?", "Pl?", "Extra-solar Planet Candidate", "a candidate extra-solar planet"),
    ObjectType::new("Planet", "Pl", "Extra-solar Confirmed Planet", "an extra-solar planet"),
    ObjectType::new("Galaxy", "G", "Galaxy", "a galaxy"),
    ObjectType::new("PartofG", "PoG", "Part of a Galaxy", "a part of a galaxy"),
    ObjectType::new("GinCl", "GiC", "Galaxy in Cluster of Galaxies", "a galaxy in a galaxy cluster"),
    ObjectType::new("BClG", "BiC", "Brightest galaxy in a Cluster (BCG)", "a brightest galaxy in a cluster"),
    ObjectType::new("GinGroup", "GiG", "Galaxy in Group of Galaxies", "a galaxy in a group of galaxies"),
    ObjectType::new("GinPair", "GiP", "Galaxy in Pair of Galaxies", "one of a pair of galaxies"),
    ObjectType::new("High_z_G", "HzG", "Galaxy with high redshift", "a high-redshift galaxy"),
    ObjectType::new("AbsLineSystem", "ALS", "Absorption Line system", "an absorption line system"),
    ObjectType::new("Ly-alpha_ALS", "LyA", "Ly alpha Absorption Line system", "a Lyman-alpha absorption line system"),
    ObjectType::new("DLy-alpha_ALS", "DLA", "Damped Ly-alpha Absorption Line system", "a damped Lyman-alpha absorption line system"),
    ObjectType::new("metal_ALS", "mAL", "metallic Absorption Line system", "a metallic absorption line system"),
    ObjectType::new("Ly-limit_ALS", "LLS", "Lyman limit system", "a Lyman limit system"),
    ObjectType::new("Broad_ALS", "BAL", "Broad Absorption Line system", "a broad absorption line system"),
    ObjectType::new("RadioG", "rG", "Radio Galaxy", "a galaxy emitting radio waves"),
    ObjectType::new("HII_G", "H2G", "HII Galaxy", "a galaxy with ionised hydrogen"),
    ObjectType::new("LSB_G", "LSB", "Low Surface Brightness Galaxy", "a galaxy with low surface brightness"),
    ObjectType::new("AGN_Candidate", "AG?", "Possible Active Galaxy Nucleus", "a possible active galactic nucleus"),
    ObjectType::new("QSO_Candidate", "Q?", "Possible Quasar", "a possible quasar"),
    ObjectType::new("Blazar_Candidate", "Bz?", "Possible Blazar", "a possible blazar"),
    ObjectType::new("BLLac_Candidate", "BL?", "Possible BL Lac", "a possible BL Lac object"),
    ObjectType::new("EmG", "EmG", "Emission-line galaxy", "an emission-line galaxy"),
    ObjectType::new("StarburstG", "SBG", "Starburst Galaxy", "a starburst galaxy"),
    ObjectType::new("BlueCompG", "bCG", "Blue compact Galaxy", "a blue compact galaxy"),
    ObjectType::new("LensedImage", "LeI", "Gravitationally Lensed Image", "a gravitationally lensed image"),
    ObjectType::new("LensedG", "LeG", "Gravitationally Lensed Image of a Galaxy", "a gravitationally lensed image of a galaxy"),
    ObjectType::new("LensedQ", "LeQ", "Gravitationally Lensed Image of a Quasar", "a gravitationally lensed image of a quasar"),
    ObjectType::new("AGN", "AGN", "Active Galaxy Nucleus", "an active galactic nucleus"),
    ObjectType::new("LINER", "LIN", "LINER-type Active Galaxy Nucleus", "a LINER galaxy"),
    ObjectType::new("Seyfert", "SyG", "Seyfert Galaxy", "a Seyfert galaxy"),
    ObjectType::new("Seyfert_1", "Sy1", "Seyfert 1 Galaxy", "a Seyfert 1 galaxy"),
    ObjectType::new("Seyfert_2", "Sy2", "Seyfert 2 Galaxy", "a Seyfert 2 galaxy"),
    ObjectType::new("Blazar", "Bla", "Blazar", "a blazar"),
    ObjectType::new("BLLac", "BLL", "BL Lac - type object", "a BL Lac object"),
    ObjectType::new("OVV", "OVV", "Optically Violently Variable object", "an optically violently variable object"),
    ObjectType::new("QSO", "QSO", "Quasar", "a quasar"),
];
